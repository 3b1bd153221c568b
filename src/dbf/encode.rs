//! Fixed-width field encoding.
//!
//! Encoding is deliberately lenient and total: every call returns exactly
//! `field.length` bytes, degrading malformed input to blanks, so the
//! writer can always emit a structurally valid file.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::schema::{FieldSpec, FieldType};

/// A typed field value. Fields left unset encode as blanks.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Date(NaiveDate),
    Bool(bool),
    Number(Decimal),
}

/// Encode one value into its fixed-width byte representation.
///
/// Always returns exactly `field.length` bytes; never fails.
pub fn encode(field: &FieldSpec, value: Option<&Value>) -> Vec<u8> {
    let length = field.length as usize;
    let mut out = match field.field_type {
        FieldType::Character | FieldType::Memo => encode_text(value, length),
        FieldType::Date => encode_date(value),
        FieldType::Logical => vec![if truthy(value) { b'T' } else { b'F' }],
        FieldType::Numeric => encode_numeric(value, length, field.decimals as usize),
    };
    out.resize(length, b' ');
    out
}

fn encode_text(value: Option<&Value>, length: usize) -> Vec<u8> {
    let text = match value {
        None => String::new(),
        Some(Value::Text(s)) => s.clone(),
        Some(Value::Number(d)) => d.to_string(),
        Some(Value::Date(d)) => d.format("%Y%m%d").to_string(),
        Some(Value::Bool(b)) => (if *b { "T" } else { "F" }).to_string(),
    };
    let mut out: Vec<u8> = text.chars().filter_map(cp1252_byte).take(length).collect();
    out.resize(length, b' ');
    out
}

fn encode_date(value: Option<&Value>) -> Vec<u8> {
    match value {
        Some(Value::Date(d)) => d.format("%Y%m%d").to_string().into_bytes(),
        Some(Value::Text(s)) if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.as_bytes().to_vec()
        }
        _ => vec![b' '; 8],
    }
}

fn encode_numeric(value: Option<&Value>, length: usize, decimals: usize) -> Vec<u8> {
    let number = match value {
        None => return vec![b' '; length],
        Some(Value::Number(d)) => Some(*d),
        Some(Value::Text(s)) => s.trim().parse::<Decimal>().ok(),
        Some(_) => None,
    };
    let Some(number) = number else {
        return vec![b' '; length];
    };
    let mut s = format!("{:.*}", decimals, number.round_dp(decimals as u32));
    if s.len() < length {
        s = format!("{s:>length$}");
    }
    let bytes = s.into_bytes();
    if bytes.len() > length {
        // Overflow keeps the rightmost digits — lenient by contract.
        bytes[bytes.len() - length..].to_vec()
    } else {
        bytes
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(d)) => !d.is_zero(),
        Some(Value::Text(s)) => !s.is_empty(),
        Some(Value::Date(_)) => true,
    }
}

/// Windows-1252 code point for a char, or `None` if unencodable.
fn cp1252_byte(c: char) -> Option<u8> {
    match c {
        '\u{0000}'..='\u{007F}' | '\u{00A0}'..='\u{00FF}' => Some(c as u8),
        '€' => Some(0x80),
        '‚' => Some(0x82),
        'ƒ' => Some(0x83),
        '„' => Some(0x84),
        '…' => Some(0x85),
        '†' => Some(0x86),
        '‡' => Some(0x87),
        'ˆ' => Some(0x88),
        '‰' => Some(0x89),
        'Š' => Some(0x8A),
        '‹' => Some(0x8B),
        'Œ' => Some(0x8C),
        'Ž' => Some(0x8E),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '˜' => Some(0x98),
        '™' => Some(0x99),
        'š' => Some(0x9A),
        '›' => Some(0x9B),
        'œ' => Some(0x9C),
        'ž' => Some(0x9E),
        'Ÿ' => Some(0x9F),
        _ => None,
    }
}
