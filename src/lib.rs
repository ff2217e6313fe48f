//! Lane Leap - cross the traffic, don't get hit
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Render surface collaborator (DOM-backed on wasm32)
//! - `platform`: Browser/native storage, gamepad and clock access
//! - `highscores`: Persistent top-10 leaderboard

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::Leaderboard;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in pixels
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player sprite - logical footprint and movement
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_MAX_X: f32 = PLAYFIELD_WIDTH - PLAYER_SIZE;
    pub const PLAYER_MAX_Y: f32 = PLAYFIELD_HEIGHT - PLAYER_SIZE;
    /// Restart position after a round win (and at game start)
    pub const PLAYER_START_X: f32 = 280.0;
    pub const PLAYER_START_Y: f32 = 550.0;
    /// Pixels contributed per pressed key (and per full analog deflection)
    pub const MOVE_STEP: f32 = 10.0;
    /// Analog axis magnitude below which input reads as zero
    pub const DEAD_ZONE: f32 = 0.2;

    /// Obstacle lane - fixed population, recycled every round
    pub const OBSTACLE_COUNT: usize = 5;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;
    /// Entry/wrap x positions: one obstacle-width off the left edge,
    /// flush with the right edge
    pub const SPAWN_LEFT_X: f32 = -OBSTACLE_WIDTH;
    pub const SPAWN_RIGHT_X: f32 = PLAYFIELD_WIDTH;
    /// Vertical lanes: integer y in [LANE_MIN_Y, LANE_MIN_Y + LANE_SPAN)
    pub const LANE_MIN_Y: f32 = 100.0;
    pub const LANE_SPAN: u32 = 400;
    /// Speed magnitude range (pixels per frame)
    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 11.0;

    /// Effective hitboxes, shrunk from the nominal footprints so that
    /// near-misses against tightly packed visuals stay misses
    pub const PLAYER_HITBOX: f32 = 38.8;
    pub const OBSTACLE_HITBOX_W: f32 = 59.0;
    pub const OBSTACLE_HITBOX_H: f32 = 40.0;
}
