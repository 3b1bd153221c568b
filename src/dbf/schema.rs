//! Field-layout description for the journal file.

use serde::{Deserialize, Serialize};

use crate::core::DiarioError;

/// dBase field type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// C — fixed-width text, Windows-1252.
    #[serde(rename = "C")]
    Character,
    /// D — date, 8 ASCII digits `YYYYMMDD`.
    #[serde(rename = "D")]
    Date,
    /// L — logical, one byte `T`/`F`.
    #[serde(rename = "L")]
    Logical,
    /// N — right-justified fixed-point decimal text.
    #[serde(rename = "N")]
    Numeric,
    /// M — memo, encoded like Character here.
    #[serde(rename = "M")]
    Memo,
}

impl FieldType {
    /// Type code byte written into the field descriptor.
    pub fn code(&self) -> u8 {
        match self {
            Self::Character => b'C',
            Self::Date => b'D',
            Self::Logical => b'L',
            Self::Numeric => b'N',
            Self::Memo => b'M',
        }
    }
}

/// One field of the record layout. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, at most 10 printable ASCII characters.
    pub name: String,
    /// dBase type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// On-disk width in bytes.
    pub length: u8,
    /// Fraction digits for Numeric fields.
    pub decimals: u8,
}

/// Optional journal fields a layout may or may not carry.
///
/// Resolved once at schema load so row construction never re-checks
/// field presence by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalFields {
    pub contra: bool,
    pub baseeuro: bool,
    pub baseimpo: bool,
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    fields: Vec<FieldSpec>,
    record_len: u16,
    header_len: u16,
}

/// The complete record layout: ordered fields plus the declared record
/// and header lengths. Constructed once at startup and passed by
/// reference to every component that needs it.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    record_len: u16,
    header_len: u16,
    optional: OptionalFields,
}

/// ContaPlus "Diario" journal layout (W32 DIARIO.DBF).
const DIARIO_LAYOUT: &str = r#"{
  "fields": [
    {"name": "ASIEN",     "type": "N", "length": 6,  "decimals": 0},
    {"name": "FECHA",     "type": "D", "length": 8,  "decimals": 0},
    {"name": "SUBCTA",    "type": "C", "length": 12, "decimals": 0},
    {"name": "CONTRA",    "type": "C", "length": 12, "decimals": 0},
    {"name": "PTADEBE",   "type": "N", "length": 16, "decimals": 2},
    {"name": "CONCEPTO",  "type": "C", "length": 25, "decimals": 0},
    {"name": "PTAHABER",  "type": "N", "length": 16, "decimals": 2},
    {"name": "FACTURA",   "type": "N", "length": 8,  "decimals": 0},
    {"name": "BASEIMPO",  "type": "N", "length": 16, "decimals": 2},
    {"name": "IVA",       "type": "N", "length": 5,  "decimals": 2},
    {"name": "RECEQUIV",  "type": "N", "length": 5,  "decimals": 2},
    {"name": "DOCUMENTO", "type": "C", "length": 10, "decimals": 0},
    {"name": "DEPARTA",   "type": "C", "length": 3,  "decimals": 0},
    {"name": "CLAVE",     "type": "C", "length": 6,  "decimals": 0},
    {"name": "ESTADO",    "type": "C", "length": 1,  "decimals": 0},
    {"name": "NCASADO",   "type": "N", "length": 6,  "decimals": 0},
    {"name": "TCASADO",   "type": "N", "length": 1,  "decimals": 0},
    {"name": "TRANS",     "type": "N", "length": 6,  "decimals": 0},
    {"name": "CAMBIO",    "type": "N", "length": 16, "decimals": 6},
    {"name": "EURODEBE",  "type": "N", "length": 16, "decimals": 2},
    {"name": "EUROHABER", "type": "N", "length": 16, "decimals": 2},
    {"name": "BASEEURO",  "type": "N", "length": 16, "decimals": 2},
    {"name": "NOCONV",    "type": "L", "length": 1,  "decimals": 0},
    {"name": "MONEDAUSO", "type": "C", "length": 1,  "decimals": 0}
  ],
  "record_len": 229,
  "header_len": 801
}"#;

impl Schema {
    /// Parse a JSON layout description.
    ///
    /// Fails with [`DiarioError::Configuration`] when the JSON is
    /// malformed or a field violates its structural invariants. The
    /// declared record/header lengths are taken at face value — see
    /// [`Schema::verify_lengths`].
    pub fn from_json(json: &str) -> Result<Self, DiarioError> {
        let raw: RawSchema = serde_json::from_str(json)
            .map_err(|e| DiarioError::Configuration(format!("invalid layout JSON: {e}")))?;
        Self::new(raw.fields, raw.record_len, raw.header_len)
    }

    /// Build a schema from already-parsed parts, checking field invariants.
    pub fn new(
        fields: Vec<FieldSpec>,
        record_len: u16,
        header_len: u16,
    ) -> Result<Self, DiarioError> {
        for f in &fields {
            if f.name.is_empty() || f.name.len() > 10 {
                return Err(DiarioError::Configuration(format!(
                    "field name '{}' must be 1-10 characters",
                    f.name
                )));
            }
            if !f.name.chars().all(|c| c.is_ascii_graphic()) {
                return Err(DiarioError::Configuration(format!(
                    "field name '{}' contains non-printable characters",
                    f.name
                )));
            }
            if f.length == 0 {
                return Err(DiarioError::Configuration(format!(
                    "field '{}' has zero length",
                    f.name
                )));
            }
            if f.decimals > f.length {
                return Err(DiarioError::Configuration(format!(
                    "field '{}': decimals {} exceed length {}",
                    f.name, f.decimals, f.length
                )));
            }
        }

        let has = |name: &str| fields.iter().any(|f| f.name == name);
        let optional = OptionalFields {
            contra: has("CONTRA"),
            baseeuro: has("BASEEURO"),
            baseimpo: has("BASEIMPO"),
        };

        Ok(Self {
            fields,
            record_len,
            header_len,
            optional,
        })
    }

    /// The built-in ContaPlus Diario journal layout.
    pub fn diario() -> Result<Self, DiarioError> {
        Self::from_json(DIARIO_LAYOUT)
    }

    /// Ordered field descriptions.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Declared record length (1 marker byte + field widths).
    pub fn record_len(&self) -> u16 {
        self.record_len
    }

    /// Declared header length (32 + 32 per field + terminator).
    pub fn header_len(&self) -> u16 {
        self.header_len
    }

    /// Which optional journal fields this layout carries.
    pub fn optional_fields(&self) -> OptionalFields {
        self.optional
    }

    /// Check that the declared lengths match the field list arithmetic:
    /// `record_len == 1 + Σ lengths`, `header_len == 32 + 32·n + 1`.
    ///
    /// The legacy importer never performed this check, so loading does
    /// not apply it; callers opt in when they want the guarantee.
    pub fn verify_lengths(&self) -> Result<(), DiarioError> {
        let rec = 1 + self
            .fields
            .iter()
            .map(|f| f.length as usize)
            .sum::<usize>();
        if rec != self.record_len as usize {
            return Err(DiarioError::Configuration(format!(
                "record_len {} but fields sum to {}",
                self.record_len, rec
            )));
        }
        let hdr = 32 + 32 * self.fields.len() + 1;
        if hdr != self.header_len as usize {
            return Err(DiarioError::Configuration(format!(
                "header_len {} but field count implies {}",
                self.header_len, hdr
            )));
        }
        Ok(())
    }
}
