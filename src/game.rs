//! Fixed-rate game loop: one simulation tick, then one draw pass

use crate::platform::{InputState, Key};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{GameState, scene, tick};
use crate::tuning::Tuning;

/// Battle state plus the input accumulated since the last tick
pub struct GameLoop {
    pub state: GameState,
    pub input: InputState,
}

impl GameLoop {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: scene::demo_battle(tuning),
            input: InputState::default(),
        }
    }

    /// Milliseconds between ticks
    pub fn tick_ms(&self) -> u32 {
        self.state.world.tuning.tick_ms
    }

    pub fn key_event(&mut self, key: Key, held: bool) {
        self.input.key_event(key, held);
    }

    /// Advance one tick, draw the result, and drop one-shot presses
    pub fn tick(&mut self, r: &mut dyn Renderer) {
        tick(&mut self.state, &self.input);
        draw_frame(&self.state, r);
        self.input.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingRenderer};

    #[test]
    fn test_press_is_seen_by_one_tick_only() {
        let mut game = GameLoop::new(Tuning::default());
        let mut r = RecordingRenderer::default();
        game.key_event(Key::Down, true);
        assert!(game.input.down_pressed);
        game.tick(&mut r);
        assert!(!game.input.down_pressed);
        // Still held
        assert!(game.input.down);
    }

    #[test]
    fn test_each_tick_draws_a_fresh_frame() {
        let mut game = GameLoop::new(Tuning::default());
        let mut r = RecordingRenderer::default();
        game.tick(&mut r);
        let first = r.commands.len();
        game.tick(&mut r);
        assert_eq!(r.commands[0], DrawCommand::Clear);
        assert!(r.commands.len() >= first);
        assert_eq!(game.state.time_ticks, 2);
    }

    #[test]
    fn test_held_key_moves_player() {
        let mut game = GameLoop::new(Tuning::default());
        let mut r = RecordingRenderer::default();
        let start = game.state.world.player.pos;
        game.key_event(Key::Left, true);
        game.tick(&mut r);
        game.key_event(Key::Left, false);
        game.tick(&mut r);
        assert_eq!(game.state.world.player.pos.x, start.x - 8.0);
    }
}
