use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;

    #[test]
    fn test_strings() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_string("a").unwrap(), None);

        store.set_string("a", "1").unwrap();
        store.set_string("a", "2").unwrap();
        assert_eq!(store.get_string("a").unwrap().as_deref(), Some("2"));

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_unique_is_idempotent() {
        let mut store = MemoryStore::new();
        assert!(store.append_unique("codes", "S2-abc").unwrap());
        assert!(store.append_unique("codes", "S2-def").unwrap());
        assert!(!store.append_unique("codes", "S2-abc").unwrap());

        assert_eq!(store.get_list("codes").unwrap(), vec!["S2-abc", "S2-def"]);
        assert_eq!(
            store.get_string("codes").unwrap().as_deref(),
            Some(r#"["S2-abc","S2-def"]"#)
        );
    }

    #[test]
    fn test_missing_list_is_empty() {
        let store = MemoryStore::new();
        assert!(store.get_list("codes").unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_list_is_an_error() {
        let mut store = MemoryStore::new();
        store.set_string("codes", "not json").unwrap();

        assert!(matches!(
            store.get_list("codes"),
            Err(TrackerError::CorruptValue { .. })
        ));
        // A corrupt list is never overwritten by an append
        assert!(store.append_unique("codes", "S2-abc").is_err());
        assert_eq!(store.get_string("codes").unwrap().as_deref(), Some("not json"));
    }
}
