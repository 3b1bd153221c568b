//! DBF file assembly.

use std::path::Path;

use chrono::{Datelike, Local};

use super::encode::{Value, encode};
use super::schema::Schema;
use crate::core::DiarioError;

/// Anything the writer can lay out as one record.
///
/// Implementations map schema field names to typed values; returning
/// `None` emits blanks for that field.
pub trait DbfRecord {
    fn value(&self, field: &str) -> Option<Value>;
}

/// Assemble the complete file image in memory.
///
/// Output length is always `header_len + record_len × rows + 1`.
pub fn to_dbf<R: DbfRecord>(schema: &Schema, rows: &[R]) -> Vec<u8> {
    let today = Local::now().date_naive();
    let mut out = Vec::with_capacity(
        schema.header_len() as usize + schema.record_len() as usize * rows.len() + 1,
    );

    // 32-byte header
    let mut header = [0u8; 32];
    header[0] = 0x03;
    header[1] = ((today.year() - 1900) & 0xFF) as u8;
    header[2] = today.month() as u8;
    header[3] = today.day() as u8;
    header[4..8].copy_from_slice(&(rows.len() as u32).to_le_bytes());
    header[8..10].copy_from_slice(&schema.header_len().to_le_bytes());
    header[10..12].copy_from_slice(&schema.record_len().to_le_bytes());
    out.extend_from_slice(&header);

    // One 32-byte descriptor per field, in schema order
    for f in schema.fields() {
        let mut desc = [0u8; 32];
        let name: Vec<u8> = f.name.bytes().filter(u8::is_ascii).take(11).collect();
        desc[..name.len()].copy_from_slice(&name);
        desc[11] = f.field_type.code();
        desc[16] = f.length;
        desc[17] = f.decimals;
        out.extend_from_slice(&desc);
    }
    out.push(0x0D);

    for row in rows {
        out.push(0x20); // not-deleted marker
        for f in schema.fields() {
            let mut data = encode(f, row.value(&f.name).as_ref());
            // Writer-boundary guard: the record grid must stay aligned
            // even if an encoding came back with the wrong width.
            data.resize(f.length as usize, b' ');
            out.extend_from_slice(&data);
        }
    }

    out.push(0x1A);
    out
}

/// Write the file to `path`, creating or overwriting it.
///
/// A mid-write failure leaves a truncated file behind; there is no
/// atomic rename-on-completion.
pub fn write_dbf<R: DbfRecord>(
    path: impl AsRef<Path>,
    schema: &Schema,
    rows: &[R],
) -> Result<(), DiarioError> {
    std::fs::write(path, to_dbf(schema, rows))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Empty;

    impl DbfRecord for Empty {
        fn value(&self, _field: &str) -> Option<Value> {
            None
        }
    }

    #[test]
    fn header_bytes() {
        let schema = Schema::diario().unwrap();
        let out = to_dbf(&schema, &[Empty, Empty, Empty]);
        assert_eq!(out[0], 0x03);
        assert_eq!(u32::from_le_bytes(out[4..8].try_into().unwrap()), 3);
        assert_eq!(u16::from_le_bytes(out[8..10].try_into().unwrap()), 801);
        assert_eq!(u16::from_le_bytes(out[10..12].try_into().unwrap()), 229);
        assert_eq!(out[29], 0x00);
    }

    #[test]
    fn descriptor_layout() {
        let schema = Schema::diario().unwrap();
        let out = to_dbf(&schema, &[] as &[Empty]);
        // First descriptor: ASIEN, N(6,0)
        let desc = &out[32..64];
        assert_eq!(&desc[..5], b"ASIEN");
        assert_eq!(desc[5], 0x00);
        assert_eq!(desc[11], b'N');
        assert_eq!(desc[16], 6);
        assert_eq!(desc[17], 0);
    }

    #[test]
    fn header_terminator_and_eof_marker() {
        let schema = Schema::diario().unwrap();
        let out = to_dbf(&schema, &[Empty]);
        let hlen = schema.header_len() as usize;
        assert_eq!(out[hlen - 1], 0x0D);
        assert_eq!(out[hlen], 0x20); // record marker right after header
        assert_eq!(*out.last().unwrap(), 0x1A);
    }

    #[test]
    fn empty_row_encodes_blank_fields() {
        let schema = Schema::diario().unwrap();
        let out = to_dbf(&schema, &[Empty]);
        let hlen = schema.header_len() as usize;
        let record = &out[hlen..hlen + schema.record_len() as usize];
        // All Character/Date/Numeric fields blank; the Logical NOCONV is 'F'.
        let non_blank: Vec<u8> = record[1..]
            .iter()
            .copied()
            .filter(|&b| b != b' ')
            .collect();
        assert_eq!(non_blank, b"F".to_vec());
    }

    #[test]
    fn output_length_formula() {
        let schema = Schema::diario().unwrap();
        for n in [0usize, 1, 5] {
            let rows: Vec<Empty> = (0..n).map(|_| Empty).collect();
            let out = to_dbf(&schema, &rows);
            assert_eq!(
                out.len(),
                schema.header_len() as usize + n * schema.record_len() as usize + 1
            );
        }
    }
}
