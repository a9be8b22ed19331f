//! Curve walking, fee and quote math

pub mod curve;
pub mod fees;
pub mod math;
pub mod quote;

pub use curve::{Curve, Segment};
pub use fees::{minimum_amount_out, split_fees, ui_amount_to_raw, FeeBreakdown};
pub use math::{CurveMath, Rounding};
pub use quote::{quote, quote_with};
