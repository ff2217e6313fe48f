//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A solid color, uniform over the full RGB space when randomized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn random(rng: &mut Pcg32) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// CSS hex form, e.g. `#1fa0c4`
    pub fn to_css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The player sprite
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    pub fn at_start() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        }
    }

    /// Apply a movement intent, then clamp to the playfield.
    ///
    /// The vertical lower bound is deliberately left open: crossing y < 0
    /// is how a round is won, so only the bottom edge clamps.
    pub fn apply_intent(&mut self, intent: Vec2) {
        self.pos += intent;
        self.pos.x = self.pos.x.clamp(0.0, PLAYER_MAX_X.max(0.0));
        if self.pos.y > PLAYER_MAX_Y {
            self.pos.y = PLAYER_MAX_Y;
        }
    }
}

/// A moving hazard crossing the playfield horizontally
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Signed x-axis velocity in pixels per frame
    pub speed: f32,
    pub color: Rgb,
}

impl Obstacle {
    /// Re-randomize this obstacle in place for a fresh round.
    ///
    /// Entry side is a coin flip; the speed sign follows the side so that
    /// left entrants travel right and right entrants travel left.
    pub fn randomize(&mut self, rng: &mut Pcg32) {
        let x = if rng.random_bool(0.5) {
            SPAWN_LEFT_X
        } else {
            SPAWN_RIGHT_X
        };
        let y = LANE_MIN_Y + rng.random_range(0..LANE_SPAN) as f32;
        let magnitude = rng.random_range(SPEED_MIN..SPEED_MAX);

        self.pos = Vec2::new(x, y);
        self.speed = if x < 0.0 { magnitude } else { -magnitude };
        self.color = Rgb::random(rng);
    }

    /// Move by one frame's velocity, wrapping to the opposite edge once
    /// fully off the playfield.
    pub fn advance(&mut self) {
        self.pos.x += self.speed;
        if self.pos.x > SPAWN_RIGHT_X && self.speed > 0.0 {
            self.pos.x = SPAWN_LEFT_X;
        }
        if self.pos.x < SPAWN_LEFT_X && self.speed < 0.0 {
            self.pos.x = SPAWN_RIGHT_X;
        }
    }
}

/// The fixed population of obstacles.
///
/// Created once at startup and recycled in place every round; the array
/// length never changes.
#[derive(Debug, Clone)]
pub struct ObstacleSet {
    obstacles: [Obstacle; OBSTACLE_COUNT],
}

impl ObstacleSet {
    pub fn new(rng: &mut Pcg32) -> Self {
        let placeholder = Obstacle {
            pos: Vec2::new(SPAWN_LEFT_X, LANE_MIN_Y),
            speed: SPEED_MIN,
            color: Rgb { r: 0, g: 0, b: 0 },
        };
        let mut set = Self {
            obstacles: [placeholder; OBSTACLE_COUNT],
        };
        set.reset_all(rng);
        set
    }

    /// Re-randomize every obstacle's entry side, lane, speed and color
    pub fn reset_all(&mut self, rng: &mut Pcg32) {
        for obstacle in &mut self.obstacles {
            obstacle.randomize(rng);
        }
    }

    /// Advance every obstacle by one frame
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[cfg(test)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }
}

/// Complete game state, advanced by [`tick`](super::tick::tick).
///
/// A restart is a fresh `GameState::new` with a new seed; nothing else
/// clears `game_over`.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub score: u32,
    pub game_over: bool,
    pub player: Player,
    pub obstacles: ObstacleSet,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = ObstacleSet::new(&mut rng);
        Self {
            seed,
            score: 0,
            game_over: false,
            player: Player::at_start(),
            obstacles,
            rng,
        }
    }

    /// Round reset after a goal-line crossing: player back to the start
    /// position, every obstacle re-randomized. Score is untouched.
    pub fn reset_round(&mut self) {
        self.player = Player::at_start();
        self.obstacles.reset_all(&mut self.rng);
    }
}
