//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Analog input (Gamepad API on web)
//! - Wall-clock timestamps

#[cfg(target_arch = "wasm32")]
pub mod input;
pub mod storage;
pub mod time;

pub use storage::{KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
