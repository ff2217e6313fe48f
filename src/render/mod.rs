//! Render surface collaborator.
//!
//! The simulation never touches layout or styling; each frame the driver
//! pushes numeric positions, colors and text through this trait. On
//! wasm32 the surface is a set of absolutely positioned DOM elements.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::highscores::Leaderboard;
use crate::sim::{GameState, Rgb};

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;

/// What the core needs from a display: position/color setters, a status
/// text sink, a restart control toggle and a leaderboard listing.
pub trait RenderSurface {
    fn set_player_position(&mut self, x: f32, y: f32);
    fn set_obstacle(&mut self, index: usize, x: f32, y: f32, color: Rgb);
    fn set_status_text(&mut self, text: &str);
    fn set_restart_visible(&mut self, visible: bool);
    fn show_leaderboard(&mut self, board: &Leaderboard);
}

/// Push the current state to the surface. Pure state -> calls; no
/// simulation mutation happens here.
pub fn draw(state: &GameState, surface: &mut dyn RenderSurface) {
    surface.set_player_position(state.player.pos.x, state.player.pos.y);
    for (index, obstacle) in state.obstacles.iter().enumerate() {
        surface.set_obstacle(index, obstacle.pos.x, obstacle.pos.y, obstacle.color);
    }
    surface.set_status_text(&status_line(state));
}

/// Score/status line shown above the playfield
pub fn status_line(state: &GameState) -> String {
    if state.game_over {
        format!("Score: {} | Game Over!", state.score)
    } else {
        format!("Score: {}", state.score)
    }
}

/// Surface that discards everything; used by the headless demo
#[derive(Debug, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn set_player_position(&mut self, _x: f32, _y: f32) {}
    fn set_obstacle(&mut self, _index: usize, _x: f32, _y: f32, _color: Rgb) {}
    fn set_status_text(&mut self, _text: &str) {}
    fn set_restart_visible(&mut self, _visible: bool) {}
    fn show_leaderboard(&mut self, _board: &Leaderboard) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::OBSTACLE_COUNT;

    /// Records calls for assertions
    #[derive(Default)]
    struct Recorder {
        player: Vec<(f32, f32)>,
        obstacles: Vec<(usize, f32, f32)>,
        status: Vec<String>,
    }

    impl RenderSurface for Recorder {
        fn set_player_position(&mut self, x: f32, y: f32) {
            self.player.push((x, y));
        }
        fn set_obstacle(&mut self, index: usize, x: f32, y: f32, _color: Rgb) {
            self.obstacles.push((index, x, y));
        }
        fn set_status_text(&mut self, text: &str) {
            self.status.push(text.to_string());
        }
        fn set_restart_visible(&mut self, _visible: bool) {}
        fn show_leaderboard(&mut self, _board: &Leaderboard) {}
    }

    #[test]
    fn draw_pushes_player_all_obstacles_and_status() {
        let state = GameState::new(1);
        let mut surface = Recorder::default();
        draw(&state, &mut surface);

        assert_eq!(surface.player.len(), 1);
        assert_eq!(surface.obstacles.len(), OBSTACLE_COUNT);
        assert_eq!(surface.status, vec!["Score: 0".to_string()]);
    }

    #[test]
    fn status_line_marks_game_over() {
        let mut state = GameState::new(1);
        state.score = 3;
        assert_eq!(status_line(&state), "Score: 3");
        state.game_over = true;
        assert_eq!(status_line(&state), "Score: 3 | Game Over!");
    }
}
