//! Sales invoice expansion into the canonical leg sequence.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::builder::{DiarioRow, build_rows};
use crate::core::{AccountMap, Asiento, DiarioError, Leg};
use crate::dbf::Schema;

/// Compose the journal rows for one sales invoice.
///
/// Legs are booked in fixed order: customer debit of the gross total,
/// bank debit of the same total (the importer's duplicate-total
/// convention, not a mistake), per VAT group a sales credit of the base
/// followed by a VAT credit routed by rate, and a closing customer
/// credit of the total.
#[allow(clippy::too_many_arguments)]
pub fn make_venta_asiento(
    schema: &Schema,
    asien: u32,
    fecha: NaiveDate,
    documento: &str,
    tercero: &str,
    bases: &[Decimal],
    rates: &[Decimal],
    cuentas: &AccountMap,
) -> Result<Vec<DiarioRow>, DiarioError> {
    if bases.len() != rates.len() {
        return Err(DiarioError::Validation(
            "bases and rates must have equal length".into(),
        ));
    }

    let bases: Vec<Decimal> = bases.iter().map(|b| b.round_dp(2)).collect();
    let rates: Vec<Decimal> = rates.iter().map(|r| r.round_dp(2)).collect();
    let ivas: Vec<Decimal> = bases
        .iter()
        .zip(&rates)
        .map(|(b, r)| (b * r / dec!(100)).round_dp(2))
        .collect();
    let total = (bases.iter().sum::<Decimal>() + ivas.iter().sum::<Decimal>()).round_dp(2);

    let mut legs = Vec::with_capacity(2 * bases.len() + 3);
    legs.push(Leg::debe(&cuentas.cliente, total));
    legs.push(Leg::debe(&cuentas.banco, total));
    for ((base, rate), iva) in bases.iter().zip(&rates).zip(&ivas) {
        legs.push(Leg::haber(&cuentas.ventas, *base));
        legs.push(
            Leg::haber(cuentas.iva_account(*rate), *iva)
                .with_base(*base)
                .with_contra(&cuentas.cliente),
        );
    }
    legs.push(Leg::haber(&cuentas.cliente, total));

    build_rows(
        schema,
        &Asiento {
            asien,
            fecha,
            documento: documento.into(),
            tercero: tercero.into(),
            legs,
        },
    )
}
