use serde::{Deserialize, Serialize};

/// A denomination of a currency. `magnitude` is the number of decimal places between the
/// atomic unit and this unit (e.g. 8 for BTC over satoshis).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub magnitude: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CryptoCurrency {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenCurrency {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub units: Vec<Unit>,
    pub parent_currency: Option<CryptoCurrency>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub currency: Option<CryptoCurrency>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccount {
    pub id: String,
    pub parent_id: Option<String>,
    pub token: TokenCurrency,
}

/// Either a base account holding a currency or a sub-account holding a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AccountLike {
    Account(Account),
    TokenAccount(TokenAccount),
}

impl AccountLike {
    /// The unit amounts of this account are displayed in: the token's first unit for token
    /// accounts, the currency's first unit otherwise.
    pub fn main_unit(&self) -> Option<&Unit> {
        match self {
            Self::TokenAccount(account) => account.token.units.first(),
            Self::Account(account) => account.currency.as_ref().and_then(|c| c.units.first()),
        }
    }

    pub fn magnitude(&self) -> u32 {
        self.main_unit().map(|unit| unit.magnitude).unwrap_or(0)
    }
}
