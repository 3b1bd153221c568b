//! Journal entry (asiento) construction and dual-currency balancing.
//!
//! Amounts are booked in euros; peseta equivalents are derived at the
//! fixed conversion rate and force-balanced on the last leg, mirroring
//! how the legacy importer reconciles rounding drift.

mod builder;
mod venta;

pub use builder::{DiarioRow, PTA_RATE, build_rows, to_pta};
pub use venta::make_venta_asiento;
