//! Ledger module containing the in-memory ledger and entry patterns

pub mod core;
pub mod patterns;

pub use core::*;
