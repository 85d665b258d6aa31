//! Report construction: query options, number formatting and the balance summary

pub mod balance_summary;
pub mod format;
pub mod query;

pub use balance_summary::*;
pub use format::{format_amount, format_percentage};
pub use query::*;
