//! Core ledger types, account mapping, and errors.

mod accounts;
mod error;
mod types;

pub use accounts::*;
pub use error::*;
pub use types::*;
