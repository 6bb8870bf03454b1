//! The demo battle: scenery, command menu, inventory and the enemy's attacks

use super::entity::{Decoration, Entity, EntityKind};
use super::menu;
use super::spawner::{Encounter, SpawnerConfig};
use super::state::{ATTACK_ID, GameState, Item};
use crate::tuning::Tuning;

/// Build the demo battle, starting in the enemy's turn.
///
/// Registration order is draw order: sprite, health bar, board, menu, attack.
pub fn demo_battle(tuning: Tuning) -> GameState {
    let mut state = GameState::new(tuning);

    for (id, decoration) in [
        ("spr_enemy", Decoration::EnemySprite),
        ("obj_health_bar", Decoration::HealthBar),
        ("obj_bullet_board", Decoration::BulletBoard),
    ] {
        state
            .entities
            .register(id, Entity::new(EntityKind::Decoration(decoration)));
    }
    menu::open_main_menu(&mut state, false, None);

    state.world.inventory = vec![
        Item::new("Pie", 50),
        Item::new("Noodles", 20),
        Item::new("Tea", 10),
    ];
    state.world.encounter = Encounter::new(vec![SpawnerConfig::wall(), SpawnerConfig::rain()]);

    if let Some(first) = state.world.encounter.next_attack() {
        state.add_spawner(ATTACK_ID, first);
    }

    log::info!(
        "Demo battle ready: {} entities, seed {:#x}",
        state.entities.len(),
        state.world.tuning.seed
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputState;
    use crate::sim::state::MENU_ID;
    use crate::sim::{TurnPhase, tick};

    #[test]
    fn test_draw_order() {
        let state = demo_battle(Tuning::default());
        let ids: Vec<_> = state.entities.ids().collect();
        assert_eq!(
            ids,
            ["spr_enemy", "obj_health_bar", "obj_bullet_board", MENU_ID, ATTACK_ID]
        );
        assert_eq!(state.world.phase, TurnPhase::EnemyTurn);
    }

    #[test]
    fn test_full_round_fight_and_back() {
        let mut state = demo_battle(Tuning::default());
        let idle = InputState::default();

        // Wall attack: 321 updates, the 322nd hands over to the player
        for _ in 0..322 {
            tick(&mut state, &idle);
        }
        assert_eq!(state.world.phase, TurnPhase::PlayerTurn);
        assert!(state.world.bullets.is_empty());

        for _ in 0..11 {
            tick(&mut state, &idle);
        }
        let confirm = InputState {
            confirm_pressed: true,
            ..Default::default()
        };
        tick(&mut state, &confirm);
        assert_eq!(state.world.phase, TurnPhase::EnemyTurn);

        // Rain is the second attack
        let attack = state.entities.get(ATTACK_ID).unwrap();
        match &attack.kind {
            EntityKind::Spawner(spawner) => assert_eq!(spawner.config.period, 20),
            other => panic!("expected spawner, got {:?}", other),
        }
    }

    #[test]
    fn test_item_menu_round_trip() {
        let mut state = demo_battle(Tuning::default());
        state.world.player.health = 10;
        let idle = InputState::default();
        for _ in 0..333 {
            tick(&mut state, &idle);
        }

        // Down twice to Item, confirm, confirm the first item
        let down = InputState {
            down_pressed: true,
            ..Default::default()
        };
        let confirm = InputState {
            confirm_pressed: true,
            ..Default::default()
        };
        tick(&mut state, &down);
        tick(&mut state, &down);
        tick(&mut state, &confirm);
        let menu = state.entities.get(MENU_ID).and_then(Entity::as_menu).unwrap();
        assert_eq!(menu.options().len(), 4);

        tick(&mut state, &confirm);
        assert_eq!(state.world.player.health, 50);
        assert_eq!(state.world.inventory.len(), 2);
        assert_eq!(state.world.phase, TurnPhase::EnemyTurn);
    }
}
