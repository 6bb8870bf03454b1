//! Turn phase transitions
//!
//! Both transitions run from the deferred queue, never mid-update.

use super::bullet::SpawnerId;
use super::deferred::DeferredAction;
use super::entity::{Entity, EntityKind};
use super::menu;
use super::state::{ATTACK_ID, BOARD_TWEEN_ID, GameState, SLIDE_ID, TurnPhase};
use super::transition::{SmoothTransition, Tween};

/// The attack pattern `from` ran out: hand control to the menu
pub fn enter_player_turn(state: &mut GameState, from: SpawnerId) {
    if state.world.phase == TurnPhase::PlayerTurn {
        log::warn!("{:?} ended while already in the player turn", from);
        return;
    }
    state.world.phase = TurnPhase::PlayerTurn;
    state.world.clear_bullets_of(from);
    if state.active_attack() == Some(from) {
        state.entities.unregister(ATTACK_ID);
    }

    let slide_ticks = state.world.tuning.slide_ticks;
    state.world.player.board_clamping = false;
    let slide = SmoothTransition::new(
        Tween::PlayerPosition {
            from: state.world.player.pos,
            to: state.world.menu_anchor(0),
        },
        slide_ticks,
    );
    state
        .entities
        .register(SLIDE_ID, Entity::new(EntityKind::Transition(slide)));

    menu::open_main_menu(state, true, None);
    state.schedule(DeferredAction::HighlightMenu(0), slide_ticks);

    log::info!("Player turn (tick {})", state.time_ticks);
}

/// A menu choice was made: start the enemy's next attack
pub fn enter_enemy_turn(state: &mut GameState) {
    state.world.phase = TurnPhase::EnemyTurn;
    menu::open_main_menu(state, false, None);

    if let Some(old) = state.active_attack() {
        state.world.clear_bullets_of(old);
    }
    let tuning = state.world.tuning.clone();
    let mut target = tuning.board;
    match state.world.encounter.next_attack() {
        Some(config) => {
            target = config.board.unwrap_or(tuning.board);
            let id = state.add_spawner(ATTACK_ID, config);
            log::info!("Enemy turn (tick {}), attack {:?}", state.time_ticks, id);
        }
        None => {
            state.entities.unregister(ATTACK_ID);
            log::info!("Enemy turn (tick {}), no attacks left", state.time_ticks);
        }
    }

    // Registered after the attack so they overwrite its forced board and the
    // player position until they finish
    let slide = SmoothTransition::new(
        Tween::PlayerPosition {
            from: state.world.player.pos,
            to: target.center(),
        },
        tuning.slide_ticks,
    );
    state.entities.unregister(SLIDE_ID);
    state
        .entities
        .register(SLIDE_ID, Entity::new(EntityKind::Transition(slide)));

    state.entities.unregister(BOARD_TWEEN_ID);
    if state.world.board != target {
        let resize = SmoothTransition::new(
            Tween::Board {
                from: state.world.board,
                to: target,
            },
            tuning.slide_ticks,
        );
        state
            .entities
            .register(BOARD_TWEEN_ID, Entity::new(EntityKind::Transition(resize)));
    }
    // Clamping would snap the player into the board mid-slide
    state.schedule(DeferredAction::SetBoardClamping(true), tuning.slide_ticks);
}
