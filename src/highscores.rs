//! Persistent leaderboard: top 10 scores across sessions.
//!
//! Wire format is a bare JSON array of `{ "score": n, "timestamp": s }`
//! objects, sorted descending by score, stored under one fixed key.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;
use crate::platform::time;

/// Maximum number of leaderboard entries kept
pub const MAX_ENTRIES: usize = 10;

/// A single past game's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u32,
    /// ISO-8601 datetime the game ended
    pub timestamp: String,
}

/// Score-sorted, capped history of completed games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Storage key for the persisted JSON array
    pub const STORAGE_KEY: &'static str = "leaderboard";

    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted list. Missing or unparseable data yields an
    /// empty board; corruption never surfaces to the caller.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(json) = store.get(Self::STORAGE_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<LeaderboardEntry>>(&json) {
            Ok(entries) => {
                log::info!("Loaded {} leaderboard entries", entries.len());
                Self { entries }
            }
            Err(err) => {
                log::warn!("Discarding corrupt leaderboard data: {err}");
                Self::new()
            }
        }
    }

    /// Persist the list, replacing the prior value entirely
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => store.set(Self::STORAGE_KEY, &json),
            Err(err) => log::warn!("Leaderboard serialize failed: {err}"),
        }
    }

    /// Record a finished game: load, append, sort descending by score,
    /// truncate to the top 10, persist. Returns the updated board for
    /// display.
    pub fn record(store: &mut dyn KeyValueStore, score: u32) -> Self {
        Self::record_at(store, score, time::now_iso())
    }

    /// As [`record`](Self::record) with an explicit timestamp
    pub fn record_at(store: &mut dyn KeyValueStore, score: u32, timestamp: String) -> Self {
        let mut board = Self::load(store);
        board.entries.push(LeaderboardEntry { score, timestamp });
        // stable sort keeps older entries ahead of equal scores
        board.entries.sort_by(|a, b| b.score.cmp(&a.score));
        board.entries.truncate(MAX_ENTRIES);
        board.save(store);
        board
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;
    use proptest::prelude::*;

    fn ts(n: u32) -> String {
        format!("2026-01-{:02}T00:00:00.000Z", n % 28 + 1)
    }

    #[test]
    fn empty_store_loads_empty_board() {
        let store = MemoryStore::new();
        assert!(Leaderboard::load(&store).is_empty());
    }

    #[test]
    fn corrupt_json_fails_soft() {
        let mut store = MemoryStore::new();
        store.set(Leaderboard::STORAGE_KEY, "{not json]");
        assert!(Leaderboard::load(&store).is_empty());

        store.set(Leaderboard::STORAGE_KEY, r#"{"score": 3}"#); // object, not array
        assert!(Leaderboard::load(&store).is_empty());
    }

    #[test]
    fn record_then_load_roundtrips() {
        let mut store = MemoryStore::new();
        Leaderboard::record_at(&mut store, 7, ts(1));
        let board = Leaderboard::load(&store);
        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.top_score(), Some(7));
    }

    #[test]
    fn entries_sort_descending() {
        let mut store = MemoryStore::new();
        for score in [3, 9, 1, 7] {
            Leaderboard::record_at(&mut store, score, ts(score));
        }
        let scores: Vec<u32> = Leaderboard::load(&store)
            .entries
            .iter()
            .map(|e| e.score)
            .collect();
        assert_eq!(scores, vec![9, 7, 3, 1]);
    }

    #[test]
    fn board_caps_at_ten() {
        let mut store = MemoryStore::new();
        for score in 0..25 {
            Leaderboard::record_at(&mut store, score, ts(score));
        }
        let board = Leaderboard::load(&store);
        assert_eq!(board.entries.len(), MAX_ENTRIES);
        // the ten highest survive
        let scores: Vec<u32> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, (15..25).rev().collect::<Vec<_>>());
    }

    #[test]
    fn low_score_dropped_when_ten_better_exist() {
        let mut store = MemoryStore::new();
        for score in 10..20 {
            Leaderboard::record_at(&mut store, score, ts(score));
        }
        let board = Leaderboard::record_at(&mut store, 1, ts(25));
        assert!(board.entries.iter().all(|e| e.score != 1));
    }

    #[test]
    fn wire_format_is_bare_array() {
        let mut store = MemoryStore::new();
        Leaderboard::record_at(&mut store, 2, "2026-08-27T10:00:00.000Z".into());
        let json = store.get(Leaderboard::STORAGE_KEY).unwrap();
        assert_eq!(
            json,
            r#"[{"score":2,"timestamp":"2026-08-27T10:00:00.000Z"}]"#
        );
    }

    proptest! {
        #[test]
        fn sorted_and_capped_after_any_sequence(scores in proptest::collection::vec(0u32..10_000, 0..40)) {
            let mut store = MemoryStore::new();
            for (i, score) in scores.iter().enumerate() {
                Leaderboard::record_at(&mut store, *score, ts(i as u32));
            }
            let board = Leaderboard::load(&store);
            prop_assert!(board.entries.len() <= MAX_ENTRIES);
            prop_assert!(board.entries.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }
}
