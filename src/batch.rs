//! Batch composition of consecutive sales asientos.
//!
//! The input records arrive already normalized from external extraction
//! collaborators; this module only runs the composition loop: skip
//! zero-total records, number the rest consecutively, and report each
//! outcome as data for the caller's log.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::asiento::{DiarioRow, make_venta_asiento};
use crate::core::{AccountMap, DiarioError, VentaRecord};
use crate::dbf::Schema;

/// Outcome of one input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchStatus {
    /// Record composed into an asiento.
    Ok,
    /// Record skipped without consuming an asiento number.
    Skip,
}

/// One accept/skip log line, keyed by document reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchLogEntry {
    pub documento: String,
    pub status: BatchStatus,
    pub message: String,
}

/// Rows and log produced by a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// All journal rows, in input order.
    pub rows: Vec<DiarioRow>,
    /// One entry per input record.
    pub log: Vec<BatchLogEntry>,
    /// First asiento number not consumed by this batch.
    pub next_asiento: u32,
}

/// Compose asientos for a batch of sales records.
///
/// Records whose gross total is not positive are skipped and logged;
/// hard failures (mismatched lists, euro imbalance) abort the batch by
/// propagating, leaving the skip-vs-abort decision with the caller.
pub fn compose_batch(
    schema: &Schema,
    start_asiento: u32,
    records: &[VentaRecord],
    cuentas: &AccountMap,
) -> Result<BatchResult, DiarioError> {
    let mut rows = Vec::new();
    let mut log = Vec::with_capacity(records.len());
    let mut asien = start_asiento;

    for record in records {
        let total = gross_total(&record.bases, &record.rates);
        if total <= Decimal::ZERO {
            log.push(BatchLogEntry {
                documento: record.documento.clone(),
                status: BatchStatus::Skip,
                message: "total<=0 (fill bases/rates)".into(),
            });
            continue;
        }

        rows.extend(make_venta_asiento(
            schema,
            asien,
            record.fecha,
            &record.documento,
            &record.tercero,
            &record.bases,
            &record.rates,
            cuentas,
        )?);
        log.push(BatchLogEntry {
            documento: record.documento.clone(),
            status: BatchStatus::Ok,
            message: format!("total={total:.2}"),
        });
        asien += 1;
    }

    Ok(BatchResult {
        rows,
        log,
        next_asiento: asien,
    })
}

fn gross_total(bases: &[Decimal], rates: &[Decimal]) -> Decimal {
    let vat: Decimal = bases
        .iter()
        .zip(rates)
        .map(|(b, r)| b * r / dec!(100))
        .sum();
    (bases.iter().sum::<Decimal>() + vat).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

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

    fn record(documento: &str, bases: Vec<Decimal>, rates: Vec<Decimal>) -> VentaRecord {
        VentaRecord {
            fecha: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            documento: documento.into(),
            tercero: "Amazon EU".into(),
            bases,
            rates,
        }
    }

    #[test]
    fn skips_zero_total_without_consuming_numbers() {
        let schema = Schema::diario().unwrap();
        let records = vec![
            record("A-1", vec![dec!(100)], vec![dec!(21)]),
            record("A-2", vec![], vec![]),
            record("A-3", vec![dec!(50)], vec![dec!(10)]),
        ];
        let result = compose_batch(&schema, 10, &records, &cuentas()).unwrap();

        assert_eq!(result.log.len(), 3);
        assert_eq!(result.log[0].status, BatchStatus::Ok);
        assert_eq!(result.log[0].message, "total=121.00");
        assert_eq!(result.log[1].status, BatchStatus::Skip);
        assert_eq!(result.log[2].status, BatchStatus::Ok);

        // 5 rows per single-rate invoice; skipped record contributes none.
        assert_eq!(result.rows.len(), 10);
        assert_eq!(result.rows[0].asien, 10);
        assert_eq!(result.rows[5].asien, 11); // A-3 got the next number
        assert_eq!(result.next_asiento, 12);
    }

    #[test]
    fn hard_failure_aborts_the_batch() {
        let schema = Schema::diario().unwrap();
        let records = vec![record("A-1", vec![dec!(100), dec!(50)], vec![dec!(21)])];
        assert!(matches!(
            compose_batch(&schema, 1, &records, &cuentas()),
            Err(DiarioError::Validation(_))
        ));
    }

    #[test]
    fn empty_batch_is_fine() {
        let schema = Schema::diario().unwrap();
        let result = compose_batch(&schema, 1, &[], &cuentas()).unwrap();
        assert!(result.rows.is_empty());
        assert!(result.log.is_empty());
        assert_eq!(result.next_asiento, 1);
    }
}
