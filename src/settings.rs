//! Game settings and preferences, persisted separately from scores.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Sound cues on/off
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 0.8,
        }
    }
}

impl Settings {
    /// Storage key for the persisted settings
    pub const STORAGE_KEY: &'static str = "lane_leap_settings";

    /// Load persisted settings, defaulting on missing or corrupt data
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings");
                return settings;
            }
            log::warn!("Discarding corrupt settings");
        }
        Self::default()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(Self::STORAGE_KEY, &json);
        }
    }

    /// Volume actually applied to cues
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn defaults_when_store_empty_or_corrupt() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
        store.set(Settings::STORAGE_KEY, "???");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn save_load_roundtrip() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            sound_enabled: false,
            master_volume: 0.3,
        };
        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn muted_volume_is_zero() {
        let settings = Settings {
            sound_enabled: false,
            master_volume: 1.0,
        };
        assert_eq!(settings.effective_volume(), 0.0);
    }
}
