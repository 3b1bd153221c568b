//! Subaccount mapping for sales entries.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Account-code lookup table for a sales asiento.
///
/// Supplied by an external configuration collaborator; this crate never
/// parses configuration files itself. Serde field names match the keys of
/// the conventional `accounts:` configuration block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountMap {
    /// Customer receivable subaccount.
    #[serde(rename = "CLIENTE")]
    pub cliente: String,
    /// Bank subaccount.
    #[serde(rename = "BANCO")]
    pub banco: String,
    /// Sales revenue subaccount.
    #[serde(rename = "VENTAS")]
    pub ventas: String,
    /// VAT payable, standard 21% rate.
    #[serde(rename = "IVA21")]
    pub iva21: String,
    /// VAT payable, reduced 10% rate.
    #[serde(rename = "IVA10")]
    pub iva10: String,
    /// VAT payable, super-reduced / other rates.
    #[serde(rename = "IVARED")]
    pub iva_reducido: String,
}

impl AccountMap {
    /// VAT-payable subaccount for a rate: 21 and 10 have dedicated
    /// accounts, everything else lands in the reduced/other bucket.
    pub fn iva_account(&self, rate: Decimal) -> &str {
        let rate = rate.round_dp(2);
        if rate == dec!(21) {
            &self.iva21
        } else if rate == dec!(10) {
            &self.iva10
        } else {
            &self.iva_reducido
        }
    }
}
