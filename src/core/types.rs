use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side of a journal movement, in euros.
///
/// Debit and credit are both optional; an absent side books as 0.00.
/// Peseta equivalents are derived by the entry builder, never supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leg {
    /// Subaccount code (e.g. "430000").
    pub subcta: String,
    /// EUR debit amount.
    pub euro_debe: Option<Decimal>,
    /// EUR credit amount.
    pub euro_haber: Option<Decimal>,
    /// Tax base backing a VAT leg.
    pub base: Option<Decimal>,
    /// Contra account reference.
    pub contra: Option<String>,
}

impl Leg {
    /// Debit leg (Debe).
    pub fn debe(subcta: impl Into<String>, amount: Decimal) -> Self {
        Self {
            subcta: subcta.into(),
            euro_debe: Some(amount),
            ..Default::default()
        }
    }

    /// Credit leg (Haber).
    pub fn haber(subcta: impl Into<String>, amount: Decimal) -> Self {
        Self {
            subcta: subcta.into(),
            euro_haber: Some(amount),
            ..Default::default()
        }
    }

    /// Attach the tax base this leg was computed from.
    pub fn with_base(mut self, base: Decimal) -> Self {
        self.base = Some(base);
        self
    }

    /// Attach a contra account reference.
    pub fn with_contra(mut self, contra: impl Into<String>) -> Self {
        self.contra = Some(contra.into());
        self
    }
}

/// A journal entry: an id plus an ordered, non-empty sequence of legs
/// sharing the same date, document reference, and counterparty.
#[derive(Debug, Clone)]
pub struct Asiento {
    /// Entry number (ASIEN).
    pub asien: u32,
    /// Entry date (FECHA).
    pub fecha: NaiveDate,
    /// Document reference (FECHA/DOCUMENTO source, truncated to 10 on output).
    pub documento: String,
    /// Counterparty name, folded into the concept text.
    pub tercero: String,
    /// Movement legs, in booking order.
    pub legs: Vec<Leg>,
}

/// Normalized sales-invoice record as handed over by external extraction
/// collaborators (PDF/spreadsheet parsing stays outside this crate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VentaRecord {
    /// Invoice date.
    pub fecha: NaiveDate,
    /// Document reference.
    pub documento: String,
    /// Counterparty name.
    pub tercero: String,
    /// Tax bases, one per VAT group.
    pub bases: Vec<Decimal>,
    /// VAT rates in percent, parallel to `bases`.
    pub rates: Vec<Decimal>,
}
