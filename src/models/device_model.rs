use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::HubError;

/// Hardware device variants known to the wallet.
///
/// Identifiers that are not recognised deserialise to [`DeviceModelId::Unknown`] so that
/// newer devices reported by a peer degrade to "no actions" instead of failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DeviceModelId {
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "nanoS")]
    NanoS,
    #[serde(rename = "nanoSP")]
    NanoSP,
    #[serde(rename = "nanoX")]
    NanoX,
    #[serde(rename = "stax")]
    Stax,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl DeviceModelId {
    pub const KNOWN: [DeviceModelId; 5] = [Self::Blue, Self::NanoS, Self::NanoSP, Self::NanoX, Self::Stax];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::NanoS => "nanoS",
            Self::NanoSP => "nanoSP",
            Self::NanoX => "nanoX",
            Self::Stax => "stax",
            Self::Unknown => "unknown",
        }
    }

    /// Marketing name of the device, as shown to the user. Unknown devices have none.
    pub fn product_name(&self) -> Option<&'static str> {
        match self {
            Self::Blue => Some("Ledger Blue"),
            Self::NanoS => Some("Ledger Nano S"),
            Self::NanoSP => Some("Ledger Nano S Plus"),
            Self::NanoX => Some("Ledger Nano X"),
            Self::Stax => Some("Ledger Stax"),
            Self::Unknown => None,
        }
    }

    /// Lenient conversion: anything outside the known set maps to `Unknown`.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for DeviceModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceModelId {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::KNOWN
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| HubError::UnknownDeviceModel(s.to_string()))
    }
}
