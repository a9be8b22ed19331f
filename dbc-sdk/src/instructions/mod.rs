//! Instruction builders for the bonding curve program

pub mod builder;
pub mod swap;
pub mod token;

pub use builder::*;
pub use swap::*;
pub use token::*;
