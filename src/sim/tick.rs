//! Fixed timestep simulation tick
//!
//! One call advances the battle by one frame: player movement, board
//! clamping, collisions, the entity update pass, then deferred actions.

use glam::Vec2;

use super::combat;
use super::entity::UpdateContext;
use super::state::{GameState, TurnPhase, World};
use crate::clamp;
use crate::platform::InputState;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &InputState) {
    state.time_ticks += 1;

    // Free movement only while the enemy attacks
    if state.world.phase == TurnPhase::EnemyTurn {
        move_player(&mut state.world, input);
    }
    if state.world.player.board_clamping {
        clamp_to_board(&mut state.world);
    }

    combat::resolve(&mut state.world);

    let GameState {
        world,
        entities,
        deferred,
        ..
    } = state;
    for (id, entity) in entities.iter_mut() {
        let mut ctx = UpdateContext::new(world, input, deferred);
        entity.update(id, &mut ctx);
    }

    state.run_deferred();
}

fn move_player(world: &mut World, input: &InputState) {
    let speed = if input.slow {
        world.tuning.slow_speed
    } else {
        world.tuning.player_speed
    };
    let mut step = Vec2::ZERO;
    if input.down {
        step.y += speed;
    }
    if input.up {
        step.y -= speed;
    }
    if input.left {
        step.x -= speed;
    }
    if input.right {
        step.x += speed;
    }
    world.player.pos += step;
}

fn clamp_to_board(world: &mut World) {
    let margin = world.tuning.board_margin;
    let board = world.board;
    let pos = &mut world.player.pos;
    pos.x = clamp(pos.x, board.left() + margin, board.right() - margin);
    pos.y = clamp(pos.y, board.top() + margin, board.bottom() - margin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ATTACK_ID, MENU_ID};
    use crate::sim::{Entity, SpawnerConfig, scene};
    use crate::tuning::Tuning;

    fn held_right() -> InputState {
        InputState {
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_clamped_movement_stops_at_board_edge() {
        let mut state = GameState::new(Tuning::default());
        assert_eq!(state.world.player.pos, Vec2::new(720.0, 770.0));
        let input = held_right();
        for _ in 0..100 {
            tick(&mut state, &input);
            assert!(state.world.player.pos.x <= 1055.0);
        }
        assert_eq!(state.world.player.pos.x, 1055.0);
        assert_eq!(state.world.player.pos.y, 770.0);
    }

    #[test]
    fn test_slow_key_halves_speed() {
        let mut state = GameState::new(Tuning::default());
        let input = InputState {
            left: true,
            slow: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.world.player.pos.x, 716.0);
    }

    #[test]
    fn test_no_free_movement_in_player_turn() {
        let mut state = GameState::new(Tuning::default());
        state.world.phase = TurnPhase::PlayerTurn;
        tick(&mut state, &held_right());
        assert_eq!(state.world.player.pos.x, 720.0);
    }

    #[test]
    fn test_clamping_disabled_lets_player_leave_board() {
        let mut state = GameState::new(Tuning::default());
        state.world.player.board_clamping = false;
        for _ in 0..100 {
            tick(&mut state, &held_right());
        }
        assert_eq!(state.world.player.pos.x, 1520.0);
    }

    #[test]
    fn test_spawner_fires_on_tick_20() {
        let mut state = GameState::new(Tuning::default());
        let config = SpawnerConfig {
            duration: None,
            ..SpawnerConfig::rain()
        };
        state.add_spawner(ATTACK_ID, config);
        let input = InputState::default();
        for _ in 0..19 {
            tick(&mut state, &input);
        }
        assert!(state.world.bullets.is_empty());
        tick(&mut state, &input);
        assert_eq!(state.world.bullets.len(), 1);
    }

    #[test]
    fn test_attack_ends_into_player_turn_then_menu_highlights() {
        let mut state = GameState::new(Tuning::default());
        let config = SpawnerConfig {
            duration: Some(5),
            ..SpawnerConfig::rain()
        };
        crate::sim::menu::open_main_menu(&mut state, false, None);
        state.add_spawner(ATTACK_ID, config);
        let input = InputState::default();

        // Five attack updates, the sixth ends the attack
        for _ in 0..6 {
            tick(&mut state, &input);
        }
        assert_eq!(state.world.phase, TurnPhase::PlayerTurn);
        assert!(!state.entities.contains(ATTACK_ID));

        // Slide takes 10 ticks, the highlight lands on the 11th
        for _ in 0..11 {
            tick(&mut state, &input);
        }
        let menu = state.entities.get(MENU_ID).and_then(Entity::as_menu).unwrap();
        assert_eq!(menu.highlight(), Some(0));
        assert_eq!(state.world.player.pos, Vec2::new(60.0, 80.0));
        // Only the menu is left: slide and task removed themselves
        assert_eq!(state.entities.len(), 1);
    }

    #[test]
    fn test_demo_battle_is_deterministic() {
        let mut a = scene::demo_battle(Tuning::default());
        let mut b = scene::demo_battle(Tuning::default());
        let inputs = [
            held_right(),
            InputState {
                up: true,
                ..Default::default()
            },
            InputState::default(),
        ];
        for i in 0..400 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input);
            tick(&mut b, input);
        }
        assert_eq!(a.world.bullets, b.world.bullets);
        assert_eq!(a.world.player, b.world.player);
        assert_eq!(a.world.phase, b.world.phase);
    }
}
