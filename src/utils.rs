use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::error::HubResult;

/// Reads and deserialises a JSON document from disk.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> HubResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
