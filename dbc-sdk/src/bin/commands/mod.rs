// Command modules for the dbc CLI

pub mod buy;
pub mod quote;
pub mod sell;
pub mod utils;
