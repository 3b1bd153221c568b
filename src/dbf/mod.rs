//! dBase III (DBF) schema, field encoding, and file writing.
//!
//! Produces the exact byte layout the ContaPlus importer expects:
//! 32-byte header, one 32-byte descriptor per field, a 0x0D terminator,
//! fixed-width records each led by a 0x20 not-deleted marker, and a
//! trailing 0x1A end-of-file byte.

mod encode;
mod schema;
mod writer;

pub use encode::{Value, encode};
pub use schema::{FieldSpec, FieldType, OptionalFields, Schema};
pub use writer::{DbfRecord, to_dbf, write_dbf};
