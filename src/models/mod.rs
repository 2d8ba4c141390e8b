//! Data models shared across the crate.
//!
//! # Key Types
//!
//! - [`DeviceModelId`] - Hardware device variants (Nano S, Nano S Plus, Nano X, Stax, ...)
//! - [`AccountLike`] - A base account or a token sub-account, carrying currency units
//! - [`Unit`] - A currency denomination with its decimal magnitude

pub mod account;
pub use account::{Account, AccountLike, CryptoCurrency, TokenAccount, TokenCurrency, Unit};
pub mod device_model;
pub use device_model::DeviceModelId;
