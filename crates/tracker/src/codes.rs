use chrono::NaiveDate;
use tracing::info;

use crate::error::{Result, TrackerError};
use crate::store::KeyValueStore;

pub mod keys {
    pub const D_CODE: &str = "pfa_dcode";
    pub const S_CODES: &str = "pfa_scodes";
    pub const TARGET_DATE: &str = "pfa_target_date";
    pub const ONBOARDED: &str = "pfa_onboarded";

    pub const ALL: [&str; 4] = [D_CODE, S_CODES, TARGET_DATE, ONBOARDED];
}

/// Saved codes and preferences on top of a key-value store.
#[derive(Debug)]
pub struct CodeRepository<S> {
    store: S,
}

impl<S: KeyValueStore> CodeRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn get_d_code(&self) -> Result<Option<String>> {
        self.store.get_string(keys::D_CODE)
    }

    pub fn save_d_code(&mut self, code: &str) -> Result<()> {
        self.store.set_string(keys::D_CODE, code)
    }

    /// Saved S-codes in the order they were added
    pub fn list_s_codes(&self) -> Result<Vec<String>> {
        self.store.get_list(keys::S_CODES)
    }

    /// Returns `false` when the code was already saved
    pub fn add_s_code(&mut self, code: &str) -> Result<bool> {
        self.store.append_unique(keys::S_CODES, code)
    }

    /// Returns `false` when the code was not saved
    pub fn remove_s_code(&mut self, code: &str) -> Result<bool> {
        let mut codes = self.list_s_codes()?;
        let before = codes.len();
        codes.retain(|c| c != code);
        if codes.len() == before {
            return Ok(false);
        }
        self.store.set_list(keys::S_CODES, &codes)?;
        Ok(true)
    }

    pub fn get_target_date(&self) -> Result<Option<NaiveDate>> {
        let Some(raw) = self.store.get_string(keys::TARGET_DATE)? else {
            return Ok(None);
        };
        raw.parse::<NaiveDate>()
            .map(Some)
            .map_err(|e| TrackerError::CorruptValue {
                key: keys::TARGET_DATE.to_string(),
                message: e.to_string(),
            })
    }

    pub fn save_target_date(&mut self, date: NaiveDate) -> Result<()> {
        self.store
            .set_string(keys::TARGET_DATE, &date.format("%Y-%m-%d").to_string())
    }

    pub fn is_onboarded(&self) -> Result<bool> {
        Ok(self.store.get_string(keys::ONBOARDED)?.as_deref() == Some("true"))
    }

    pub fn set_onboarded(&mut self) -> Result<()> {
        self.store.set_string(keys::ONBOARDED, "true")
    }

    /// Removes every key the tracker owns, leaving anything else in the store.
    pub fn clear_all(&mut self) -> Result<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        info!("Cleared all saved codes and preferences");
        Ok(())
    }
}
