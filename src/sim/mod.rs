//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame (no delta-time scaling)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit, obstacle_hitbox, player_hitbox};
pub use input::{KeyStates, PadAxes, sample};
pub use state::{GameState, Obstacle, ObstacleSet, Player, Rgb};
pub use tick::{GameEvent, TickInput, tick};
