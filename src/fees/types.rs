use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Protocol family of a transaction, selecting which fee fields apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionFamily {
    Evm,
    Bitcoin,
    Other(String),
}

impl TransactionFamily {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Evm => "evm",
            Self::Bitcoin => "bitcoin",
            Self::Other(family) => family,
        }
    }
}

impl From<&str> for TransactionFamily {
    fn from(s: &str) -> Self {
        match s {
            "evm" => Self::Evm,
            "bitcoin" => Self::Bitcoin,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionFamily {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TransactionFamily> for String {
    fn from(family: TransactionFamily) -> Self {
        family.as_str().to_string()
    }
}

impl std::fmt::Display for TransactionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transaction as built by a coin integration. Only the fee related fields are modelled;
/// which of them are meaningful depends on `family`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub family: TransactionFamily,
    #[serde(default)]
    pub max_fee_per_gas: Option<Decimal>,
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<Decimal>,
    #[serde(default)]
    pub custom_gas_limit: Option<Decimal>,
    #[serde(default)]
    pub gas_limit: Option<Decimal>,
    #[serde(default)]
    pub fee_per_byte: Option<Decimal>,
    /// Coin selection strategy, passed through as-is.
    #[serde(default)]
    pub utxo_strategy: Option<serde_json::Value>,
    #[serde(default)]
    pub fees: Option<Decimal>,
}

impl Transaction {
    /// An empty transaction of the given family.
    pub fn new(family: impl Into<TransactionFamily>) -> Self {
        Self {
            family: family.into(),
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
            custom_gas_limit: None,
            gas_limit: None,
            fee_per_byte: None,
            utxo_strategy: None,
            fees: None,
        }
    }
}

/// Fee fields relevant to a transaction's family. Absent inputs stay absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum FeeView {
    Evm {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_fee_per_gas: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_priority_fee_per_gas: Option<Decimal>,
        gas_limit: Decimal,
        #[serde(skip_serializing_if = "Option::is_none")]
        custom_gas_limit: Option<Decimal>,
    },
    Bitcoin {
        #[serde(skip_serializing_if = "Option::is_none")]
        fee_per_byte: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        utxo_strategy: Option<serde_json::Value>,
    },
    Generic {
        #[serde(skip_serializing_if = "Option::is_none")]
        fees: Option<Decimal>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_parses_known_and_unknown_tags() {
        assert_eq!(TransactionFamily::from("evm"), TransactionFamily::Evm);
        assert_eq!(TransactionFamily::from("bitcoin"), TransactionFamily::Bitcoin);
        assert_eq!(
            TransactionFamily::from("unknown-family"),
            TransactionFamily::Other("unknown-family".to_string())
        );
    }

    #[test]
    fn deserialises_transaction_with_missing_fields() {
        let tx: Transaction = serde_json::from_str(r#"{ "family": "bitcoin", "feePerByte": 5 }"#).unwrap();
        assert_eq!(tx.family, TransactionFamily::Bitcoin);
        assert_eq!(tx.fee_per_byte, Some(Decimal::from(5)));
        assert!(tx.utxo_strategy.is_none());
        assert!(tx.fees.is_none());
    }

    #[test]
    fn large_json_numbers_keep_every_digit() {
        let tx: Transaction =
            serde_json::from_str(r#"{ "family": "tezos", "fees": 123456789012345678901234 }"#).unwrap();
        assert_eq!(tx.fees, Some(Decimal::from_i128_with_scale(123_456_789_012_345_678_901_234, 0)));

        let tx: Transaction =
            serde_json::from_str(r#"{ "family": "bitcoin", "feePerByte": 0.000000000000000000123 }"#).unwrap();
        assert_eq!(tx.fee_per_byte, Some(Decimal::from_i128_with_scale(123, 21)));
    }

    #[test]
    fn fee_view_omits_absent_fields() {
        let view = FeeView::Bitcoin {
            fee_per_byte: Some(Decimal::from(5)),
            utxo_strategy: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("feePerByte"));
    }
}
