//! Fee normalisation for transactions of different protocol families.
//!
//! - [`extract_fee_fields`]: keeps only the fee fields relevant to a transaction's family
//! - [`to_display_amount`]: converts atomic amounts to an account's display unit
//!
//! # Families
//!
//! | Family    | Fee view fields                                                        |
//! |-----------|------------------------------------------------------------------------|
//! | `evm`     | `maxFeePerGas`, `maxPriorityFeePerGas`, `gasLimit`, `customGasLimit`   |
//! | `bitcoin` | `feePerByte`, `utxoStrategy`                                           |
//! | other     | `fees`                                                                 |
//!
//! The EVM `gasLimit` comes from a [`GasLimitEstimator`]; [`EvmGasLimit`] is the default.

mod extractor;
mod types;
mod units;

pub use extractor::{EvmGasLimit, GasLimitEstimator, extract_fee_fields};
pub use types::{FeeView, Transaction, TransactionFamily};
pub use units::{format_display_amount, parse_amount, to_display_amount};
