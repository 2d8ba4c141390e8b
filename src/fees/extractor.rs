use log::trace;
use rust_decimal::Decimal;

use super::types::{FeeView, Transaction, TransactionFamily};

/// Source of the effective gas limit of an EVM transaction.
pub trait GasLimitEstimator {
    fn gas_limit(&self, transaction: &Transaction) -> Decimal;
}

/// Uses the user's custom gas limit when set, then the estimated one, then zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmGasLimit;

impl GasLimitEstimator for EvmGasLimit {
    fn gas_limit(&self, transaction: &Transaction) -> Decimal {
        transaction
            .custom_gas_limit
            .or(transaction.gas_limit)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Picks the fee fields that matter for the transaction's family.
///
/// Families without dedicated handling fall back to the generic `fees` field.
pub fn extract_fee_fields(transaction: &Transaction, estimator: &dyn GasLimitEstimator) -> FeeView {
    trace!(family = transaction.family.as_str(); "Extracting fee fields");

    match &transaction.family {
        TransactionFamily::Evm => FeeView::Evm {
            max_fee_per_gas: transaction.max_fee_per_gas,
            max_priority_fee_per_gas: transaction.max_priority_fee_per_gas,
            gas_limit: estimator.gas_limit(transaction),
            custom_gas_limit: transaction.custom_gas_limit,
        },
        TransactionFamily::Bitcoin => FeeView::Bitcoin {
            fee_per_byte: transaction.fee_per_byte,
            utxo_strategy: transaction.utxo_strategy.clone(),
        },
        TransactionFamily::Other(_) => FeeView::Generic { fees: transaction.fees },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::json;

    use super::*;

    struct FixedEstimator {
        calls: Cell<u32>,
    }

    impl GasLimitEstimator for FixedEstimator {
        fn gas_limit(&self, _transaction: &Transaction) -> Decimal {
            self.calls.set(self.calls.get() + 1);
            Decimal::from(50_000)
        }
    }

    #[test]
    fn bitcoin_keeps_only_bitcoin_fields() {
        let tx: Transaction = serde_json::from_value(json!({
            "family": "bitcoin",
            "feePerByte": 5,
            "utxoStrategy": "x",
            "fees": 100,
            "maxFeePerGas": 7
        }))
        .unwrap();

        let view = extract_fee_fields(&tx, &EvmGasLimit);
        assert_eq!(
            view,
            FeeView::Bitcoin {
                fee_per_byte: Some(Decimal::from(5)),
                utxo_strategy: Some(json!("x")),
            }
        );
    }

    #[test]
    fn evm_delegates_gas_limit_to_estimator() {
        let tx: Transaction = serde_json::from_value(json!({
            "family": "evm",
            "maxFeePerGas": 10,
            "maxPriorityFeePerGas": 2,
            "customGasLimit": 21000
        }))
        .unwrap();
        let estimator = FixedEstimator { calls: Cell::new(0) };

        let view = extract_fee_fields(&tx, &estimator);
        assert_eq!(
            view,
            FeeView::Evm {
                max_fee_per_gas: Some(Decimal::from(10)),
                max_priority_fee_per_gas: Some(Decimal::from(2)),
                gas_limit: Decimal::from(50_000),
                custom_gas_limit: Some(Decimal::from(21_000)),
            }
        );
        assert_eq!(estimator.calls.get(), 1);
    }

    #[test]
    fn default_gas_limit_prefers_custom_value() {
        let mut tx = Transaction::new("evm");
        tx.gas_limit = Some(Decimal::from(30_000));
        assert_eq!(EvmGasLimit.gas_limit(&tx), Decimal::from(30_000));

        tx.custom_gas_limit = Some(Decimal::from(21_000));
        assert_eq!(EvmGasLimit.gas_limit(&tx), Decimal::from(21_000));

        assert_eq!(EvmGasLimit.gas_limit(&Transaction::new("evm")), Decimal::ZERO);
    }

    #[test]
    fn unknown_family_falls_back_to_fees() {
        let tx: Transaction = serde_json::from_value(json!({
            "family": "unknown-family",
            "fees": 42
        }))
        .unwrap();
        assert_eq!(
            extract_fee_fields(&tx, &EvmGasLimit),
            FeeView::Generic {
                fees: Some(Decimal::from(42))
            }
        );
    }

    #[test]
    fn absent_fields_stay_absent() {
        let view = extract_fee_fields(&Transaction::new("evm"), &EvmGasLimit);
        assert_eq!(
            view,
            FeeView::Evm {
                max_fee_per_gas: None,
                max_priority_fee_per_gas: None,
                gas_limit: Decimal::ZERO,
                custom_gas_limit: None,
            }
        );
        assert_eq!(
            extract_fee_fields(&Transaction::new("tezos"), &EvmGasLimit),
            FeeView::Generic { fees: None }
        );
    }
}
