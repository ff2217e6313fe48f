//! Axis-aligned bounding-box collision between the player and obstacles.
//!
//! Hitboxes are inset from the nominal sprite footprints: the player's
//! 40x40 shrinks to 38.8x38.8 and the obstacle's 60x40 shrinks to 59x40,
//! both centered. The margin keeps pixel-tight passes survivable.

use glam::Vec2;

use super::state::Obstacle;
use crate::consts::*;

/// An axis-aligned box: top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    /// Standard four-inequality overlap test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Effective player hitbox, centered within its nominal footprint
pub fn player_hitbox(pos: Vec2) -> Aabb {
    Aabb {
        x: pos.x + (PLAYER_SIZE - PLAYER_HITBOX) / 2.0,
        y: pos.y + (PLAYER_SIZE - PLAYER_HITBOX) / 2.0,
        w: PLAYER_HITBOX,
        h: PLAYER_HITBOX,
    }
}

/// Effective obstacle hitbox, centered within its nominal footprint
pub fn obstacle_hitbox(pos: Vec2) -> Aabb {
    Aabb {
        x: pos.x + (OBSTACLE_WIDTH - OBSTACLE_HITBOX_W) / 2.0,
        y: pos.y + (OBSTACLE_HEIGHT - OBSTACLE_HITBOX_H) / 2.0,
        w: OBSTACLE_HITBOX_W,
        h: OBSTACLE_HITBOX_H,
    }
}

/// Index of the first obstacle whose hitbox overlaps the player's, if any
pub fn first_hit(player_pos: Vec2, obstacles: &[Obstacle]) -> Option<usize> {
    let player = player_hitbox(player_pos);
    obstacles
        .iter()
        .position(|o| player.overlaps(&obstacle_hitbox(o.pos)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Rgb;

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            speed: 2.0,
            color: Rgb { r: 0, g: 0, b: 0 },
        }
    }

    #[test]
    fn hitboxes_use_documented_insets() {
        let p = player_hitbox(Vec2::new(100.0, 200.0));
        assert_eq!(p, Aabb { x: 100.6, y: 200.6, w: 38.8, h: 38.8 });

        let o = obstacle_hitbox(Vec2::new(100.0, 200.0));
        assert_eq!(o, Aabb { x: 100.5, y: 200.0, w: 59.0, h: 40.0 });
    }

    #[test]
    fn overlapping_boxes_collide() {
        let player = Vec2::new(100.0, 200.0);
        // obstacle dead center on the player
        assert_eq!(first_hit(player, &[obstacle_at(90.0, 200.0)]), Some(0));
    }

    #[test]
    fn separated_boxes_miss() {
        let player = Vec2::new(100.0, 200.0);
        assert_eq!(first_hit(player, &[obstacle_at(300.0, 200.0)]), None);
        assert_eq!(first_hit(player, &[obstacle_at(100.0, 400.0)]), None);
    }

    #[test]
    fn inset_margin_turns_edge_graze_into_miss() {
        // Nominal footprints touch at x=140 and still overlap at x=139,
        // but the insets (0.6 + 0.5) keep the hitboxes apart there.
        let player = Vec2::new(100.0, 200.0);
        assert_eq!(first_hit(player, &[obstacle_at(140.0, 200.0)]), None);
        assert_eq!(first_hit(player, &[obstacle_at(139.0, 200.0)]), None);
        // Past the combined margin the overlap registers.
        assert_eq!(first_hit(player, &[obstacle_at(138.0, 200.0)]), Some(0));
    }

    #[test]
    fn first_overlap_wins() {
        let player = Vec2::new(100.0, 200.0);
        let obstacles = [
            obstacle_at(400.0, 200.0),
            obstacle_at(95.0, 200.0),
            obstacle_at(100.0, 200.0),
        ];
        assert_eq!(first_hit(player, &obstacles), Some(1));
    }

    #[test]
    fn vertical_separation_respects_obstacle_height() {
        let player = Vec2::new(100.0, 200.0);
        // Player hitbox spans y 200.6..239.4; obstacle at y=240 spans 240..280.
        assert_eq!(first_hit(player, &[obstacle_at(100.0, 240.0)]), None);
        assert_eq!(first_hit(player, &[obstacle_at(100.0, 239.0)]), Some(0));
    }
}
