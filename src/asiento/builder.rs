//! Leg-to-row materialization and balancing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{Asiento, DiarioError};
use crate::dbf::{DbfRecord, Schema, Value};

/// Fixed EUR→PTA conversion rate (irrevocable since 1999).
pub const PTA_RATE: Decimal = dec!(166.386);

/// Currency-usage marker: amounts entered in euros, pesetas derived.
const MONEDA_USO: &str = "2";

/// Convert a euro amount to whole pesetas.
pub fn to_pta(eur: Decimal) -> Decimal {
    (eur * PTA_RATE).round()
}

/// One journal row, shaped for the Diario layout.
///
/// The field set is fixed at construction; the schema's optional-field
/// capabilities decide which of the optional members get populated.
#[derive(Debug, Clone, PartialEq)]
pub struct DiarioRow {
    pub asien: u32,
    pub fecha: NaiveDate,
    pub subcta: String,
    pub contra: Option<String>,
    pub concepto: String,
    pub documento: String,
    pub eurodebe: Decimal,
    pub eurohaber: Decimal,
    pub ptadebe: Decimal,
    pub ptahaber: Decimal,
    pub baseeuro: Option<Decimal>,
    pub baseimpo: Option<Decimal>,
}

impl DbfRecord for DiarioRow {
    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "ASIEN" => Some(Value::Number(self.asien.into())),
            "FECHA" => Some(Value::Date(self.fecha)),
            "SUBCTA" => Some(Value::Text(self.subcta.clone())),
            "CONTRA" => self.contra.clone().map(Value::Text),
            "CONCEPTO" => Some(Value::Text(self.concepto.clone())),
            "DOCUMENTO" => Some(Value::Text(self.documento.clone())),
            "MONEDAUSO" => Some(Value::Text(MONEDA_USO.into())),
            "EURODEBE" => Some(Value::Number(self.eurodebe)),
            "EUROHABER" => Some(Value::Number(self.eurohaber)),
            "PTADEBE" => Some(Value::Number(self.ptadebe)),
            "PTAHABER" => Some(Value::Number(self.ptahaber)),
            "BASEEURO" => self.baseeuro.map(Value::Number),
            "BASEIMPO" => self.baseimpo.map(Value::Number),
            _ => None,
        }
    }
}

/// Materialize an asiento's legs into journal rows and balance them.
///
/// Euro amounts are rounded to the cent and must balance on their own —
/// an imbalance is fatal. Derived peseta totals may drift by rounding;
/// the whole-unit difference is absorbed by the last leg's smaller side,
/// even when that leaves the last leg carrying only the correction.
pub fn build_rows(schema: &Schema, asiento: &Asiento) -> Result<Vec<DiarioRow>, DiarioError> {
    if asiento.legs.is_empty() {
        return Err(DiarioError::Validation(format!(
            "asiento {} has no legs",
            asiento.asien
        )));
    }

    let optional = schema.optional_fields();
    let concepto = format!("Fra.{} {}", asiento.documento, asiento.tercero);
    let documento: String = asiento.documento.chars().take(10).collect();

    let mut rows = Vec::with_capacity(asiento.legs.len());
    for leg in &asiento.legs {
        let eurodebe = leg.euro_debe.unwrap_or_default().round_dp(2);
        let eurohaber = leg.euro_haber.unwrap_or_default().round_dp(2);
        let mut row = DiarioRow {
            asien: asiento.asien,
            fecha: asiento.fecha,
            subcta: leg.subcta.clone(),
            contra: None,
            concepto: concepto.clone(),
            documento: documento.clone(),
            eurodebe,
            eurohaber,
            ptadebe: to_pta(eurodebe),
            ptahaber: to_pta(eurohaber),
            baseeuro: None,
            baseimpo: None,
        };
        if optional.contra {
            row.contra = leg.contra.clone();
        }
        if let Some(base) = leg.base {
            if optional.baseeuro {
                row.baseeuro = Some(base.round_dp(2));
            }
            if optional.baseimpo {
                row.baseimpo = Some(to_pta(base));
            }
        }
        rows.push(row);
    }

    // PTA balance: whole-unit drift lands on the last leg's smaller side.
    let debe_pta: Decimal = rows.iter().map(|r| r.ptadebe).sum();
    let haber_pta: Decimal = rows.iter().map(|r| r.ptahaber).sum();
    let diff = (debe_pta - haber_pta).round();
    if !diff.is_zero() {
        if let Some(last) = rows.last_mut() {
            if diff > Decimal::ZERO {
                last.ptahaber += diff.abs();
            } else {
                last.ptadebe += diff.abs();
            }
        }
    }

    // EUR sanity: the source currency must balance on its own.
    let debe_eur: Decimal = rows.iter().map(|r| r.eurodebe).sum();
    let haber_eur: Decimal = rows.iter().map(|r| r.eurohaber).sum();
    if !(debe_eur - haber_eur).round_dp(2).is_zero() {
        return Err(DiarioError::Imbalance {
            asien: asiento.asien,
            debe: debe_eur,
            haber: haber_eur,
        });
    }

    Ok(rows)
}
