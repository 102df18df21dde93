//! Key-value persistence behind the tracker.
//!
//! Values are strings; lists are kept as JSON arrays under a single key so
//! every backend only has to store text.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::{Result, TrackerError};

pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Result<Option<String>>;

    fn set_string(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;

    fn get_list(&self, key: &str) -> Result<Vec<String>> {
        match self.get_string(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| TrackerError::CorruptValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn set_list(&mut self, key: &str, values: &[String]) -> Result<()> {
        let raw = serde_json::to_string(values)?;
        self.set_string(key, &raw)
    }

    /// Appends `value` unless the list already holds it. Returns whether
    /// the list changed.
    fn append_unique(&mut self, key: &str, value: &str) -> Result<bool> {
        let mut values = self.get_list(key)?;
        if values.iter().any(|v| v == value) {
            return Ok(false);
        }
        values.push(value.to_string());
        self.set_list(key, &values)?;
        Ok(true)
    }
}
