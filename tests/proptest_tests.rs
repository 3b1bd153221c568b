//! Property-based tests for field encoding and balancing invariants.

use chrono::NaiveDate;
use diario::asiento::make_venta_asiento;
use diario::core::AccountMap;
use diario::dbf::{FieldSpec, FieldType, Schema, Value, encode, to_dbf};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn cuentas() -> AccountMap {
    AccountMap {
        cliente: "430000".into(),
        banco: "570000".into(),
        ventas: "700000".into(),
        iva21: "477001".into(),
        iva10: "477002".into(),
        iva_reducido: "477003".into(),
    }
}

// ── Strategies ──────────────────────────────────────────────────────────────

fn arb_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::Character),
        Just(FieldType::Date),
        Just(FieldType::Logical),
        Just(FieldType::Numeric),
        Just(FieldType::Memo),
    ]
}

fn arb_field() -> impl Strategy<Value = FieldSpec> {
    (arb_field_type(), 1u8..=40).prop_map(|(field_type, length)| FieldSpec {
        name: "X".into(),
        field_type,
        length,
        decimals: if field_type == FieldType::Numeric {
            length.min(2)
        } else {
            0
        },
    })
}

fn arb_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        ".{0,60}".prop_map(|s| Some(Value::Text(s))),
        any::<bool>().prop_map(|b| Some(Value::Bool(b))),
        (-1_000_000_000i64..1_000_000_000i64)
            .prop_map(|n| Some(Value::Number(Decimal::new(n, 2)))),
        (0u32..36524).prop_map(|d| {
            let epoch = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
            Some(Value::Date(epoch + chrono::Days::new(d as u64)))
        }),
    ]
}

/// A base amount in cents, 0.01 to 99999.99.
fn arb_base() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(dec!(21)),
        Just(dec!(10)),
        Just(dec!(4)),
        Just(dec!(5.5)),
    ]
}

fn arb_invoice() -> impl Strategy<Value = (Vec<Decimal>, Vec<Decimal>)> {
    prop::collection::vec((arb_base(), arb_rate()), 1..6)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    /// The encoder is total: every (field, value) pair yields exactly
    /// `field.length` bytes, whatever the input.
    #[test]
    fn encode_always_returns_declared_length(field in arb_field(), value in arb_value()) {
        let out = encode(&field, value.as_ref());
        prop_assert_eq!(out.len(), field.length as usize);
    }

    /// Every composed sales entry balances to the cent in euros and
    /// exactly in pesetas after correction.
    #[test]
    fn venta_always_balances((bases, rates) in arb_invoice()) {
        let schema = Schema::diario().unwrap();
        let fecha = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let rows = make_venta_asiento(
            &schema, 1, fecha, "PROP-1", "Amazon EU", &bases, &rates, &cuentas(),
        ).unwrap();

        prop_assert_eq!(rows.len(), 2 * bases.len() + 3);

        let eur_debe: Decimal = rows.iter().map(|r| r.eurodebe).sum();
        let eur_haber: Decimal = rows.iter().map(|r| r.eurohaber).sum();
        prop_assert_eq!(eur_debe, eur_haber);

        let pta_debe: Decimal = rows.iter().map(|r| r.ptadebe).sum();
        let pta_haber: Decimal = rows.iter().map(|r| r.ptahaber).sum();
        prop_assert_eq!(pta_debe, pta_haber);
    }

    /// File size follows the declared geometry for any row count.
    #[test]
    fn file_size_is_linear_in_rows((bases, rates) in arb_invoice()) {
        let schema = Schema::diario().unwrap();
        let fecha = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let rows = make_venta_asiento(
            &schema, 1, fecha, "PROP-2", "Amazon EU", &bases, &rates, &cuentas(),
        ).unwrap();
        let bytes = to_dbf(&schema, &rows);
        prop_assert_eq!(
            bytes.len(),
            schema.header_len() as usize + rows.len() * schema.record_len() as usize + 1
        );
    }
}
