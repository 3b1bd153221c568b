//! # diario
//!
//! ContaPlus Diario DBF export: turns normalized sales-invoice data into
//! the legacy dBase III journal file ContaPlus imports, with double-entry
//! balance guaranteed in both euros and pesetas (fixed rate 166.386).
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The on-disk byte layout (header, field descriptors, records, terminator)
//! is a hard compatibility contract with the accounting package; any
//! deviation in field order, padding, or header bytes breaks import.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use diario::asiento::make_venta_asiento;
//! use diario::core::AccountMap;
//! use diario::dbf::{Schema, to_dbf};
//! use rust_decimal_macros::dec;
//!
//! let schema = Schema::diario().unwrap();
//! let cuentas = AccountMap {
//!     cliente: "430000".into(),
//!     banco: "570000".into(),
//!     ventas: "700000".into(),
//!     iva21: "477001".into(),
//!     iva10: "477002".into(),
//!     iva_reducido: "477003".into(),
//! };
//!
//! let rows = make_venta_asiento(
//!     &schema,
//!     1,
//!     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
//!     "INV-0001",
//!     "Amazon EU",
//!     &[dec!(100.00), dec!(50.00)],
//!     &[dec!(21), dec!(10)],
//!     &cuentas,
//! )
//! .unwrap();
//!
//! let bytes = to_dbf(&schema, &rows);
//! assert_eq!(
//!     bytes.len(),
//!     schema.header_len() as usize + rows.len() * schema.record_len() as usize + 1,
//! );
//! ```

pub mod asiento;
pub mod batch;
pub mod core;
pub mod dbf;

// Re-export core types at crate root for convenience
pub use crate::core::*;
