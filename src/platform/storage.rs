//! Key-value string storage behind a minimal trait.
//!
//! The leaderboard and settings persist through this seam so the sim
//! and stores stay testable without a browser. LocalStorage backs it on
//! wasm32; everything else gets an in-memory map.

use std::collections::HashMap;

/// Durable string store. Writes replace the prior value entirely;
/// last write wins if sessions race (accepted limitation).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for native runs and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage. Any failure (storage disabled, quota) degrades
/// to "no value" / silent drop rather than surfacing to gameplay.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage write failed for key {key}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v1");
        assert_eq!(store.get("k").as_deref(), Some("v1"));
        store.set("k", "v2");
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }
}
