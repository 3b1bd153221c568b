use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while building or writing a journal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiarioError {
    /// The schema layout description could not be parsed or is invalid.
    #[error("schema configuration error: {0}")]
    Configuration(String),

    /// Input data violates a structural rule (mismatched lists, empty entry).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An asiento does not balance in euros beyond cent precision.
    ///
    /// Euro figures are the source of truth and are never auto-corrected;
    /// only the derived peseta totals absorb rounding.
    #[error("asiento {asien} not balanced in EUR: debit {debe} vs credit {haber}")]
    Imbalance {
        asien: u32,
        debe: Decimal,
        haber: Decimal,
    },

    /// File-system failure while writing the DBF.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
