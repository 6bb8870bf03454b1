//! Smooth linear transitions between two values over a number of ticks

use glam::Vec2;

use super::deferred::DeferredAction;
use super::entity::{EntityId, UpdateContext};
use super::rect::Rect;
use super::state::World;
use crate::Lerp;

/// The value being animated and where it is written
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tween {
    PlayerPosition { from: Vec2, to: Vec2 },
    Board { from: Rect, to: Rect },
}

impl Tween {
    fn write(&self, t: f32, world: &mut World) {
        match *self {
            Tween::PlayerPosition { from, to } => world.player.pos = <Vec2 as Lerp>::lerp(t, from, to),
            Tween::Board { from, to } => world.board = <Rect as Lerp>::lerp(t, from, to),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmoothTransition {
    pub tween: Tween,
    duration: u32,
    elapsed: u32,
}

impl SmoothTransition {
    /// A zero duration finishes on the first update
    pub fn new(tween: Tween, duration: u32) -> Self {
        Self {
            tween,
            duration: duration.max(1),
            elapsed: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub(crate) fn update(&mut self, id: &EntityId, ctx: &mut UpdateContext<'_>) {
        self.elapsed += 1;
        // Unclamped: removal is queued on the tick t reaches 1
        let t = self.elapsed as f32 / self.duration as f32;
        self.tween.write(t, ctx.world);
        if self.is_finished() {
            ctx.defer(DeferredAction::Unregister(id.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputState;
    use crate::tuning::Tuning;

    #[test]
    fn test_slide_reaches_target_and_unregisters() {
        let mut world = World::new(Tuning::default());
        let id = EntityId::from("obj_slide_player");
        let mut slide = SmoothTransition::new(
            Tween::PlayerPosition {
                from: Vec2::new(720.0, 770.0),
                to: Vec2::new(60.0, 80.0),
            },
            10,
        );
        let input = InputState::default();
        let mut deferred = Vec::new();

        for _ in 0..5 {
            let mut ctx = UpdateContext::new(&mut world, &input, &mut deferred);
            slide.update(&id, &mut ctx);
        }
        assert_eq!(world.player.pos, Vec2::new(390.0, 425.0));
        assert!(deferred.is_empty());

        for _ in 0..5 {
            let mut ctx = UpdateContext::new(&mut world, &input, &mut deferred);
            slide.update(&id, &mut ctx);
        }
        assert!((world.player.pos - Vec2::new(60.0, 80.0)).length() < 1e-3);
        assert!(slide.is_finished());
        assert!(matches!(deferred.as_slice(), [DeferredAction::Unregister(x)] if *x == id));
    }

    #[test]
    fn test_board_tween_interpolates_rect() {
        let mut world = World::new(Tuning::default());
        let id = EntityId::from("obj_board_tween");
        let mut tween = SmoothTransition::new(
            Tween::Board {
                from: Rect::new(0.0, 0.0, 100.0, 100.0),
                to: Rect::new(100.0, 0.0, 300.0, 50.0),
            },
            2,
        );
        let input = InputState::default();
        let mut deferred = Vec::new();
        let mut ctx = UpdateContext::new(&mut world, &input, &mut deferred);
        tween.update(&id, &mut ctx);
        assert_eq!(world.board, Rect::new(50.0, 0.0, 200.0, 75.0));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut world = World::new(Tuning::default());
        let id = EntityId::from("t");
        let mut tween = SmoothTransition::new(
            Tween::PlayerPosition {
                from: Vec2::ZERO,
                to: Vec2::ONE,
            },
            0,
        );
        let input = InputState::default();
        let mut deferred = Vec::new();
        let mut ctx = UpdateContext::new(&mut world, &input, &mut deferred);
        tween.update(&id, &mut ctx);
        assert_eq!(world.player.pos, Vec2::ONE);
        assert_eq!(deferred.len(), 1);
    }
}
