//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there are no
//! globals. Entity updates get `&mut World` plus a deferred-action queue, and
//! the registry itself is only touched between passes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, SpawnerId};
use super::deferred::{DeferredAction, ScheduledTask};
use super::entity::{Entity, EntityId, EntityKind, Registry};
use super::rect::Rect;
use super::spawner::{Encounter, Spawner, SpawnerConfig};
use crate::tuning::Tuning;

/// Registry key of the enemy's current attack pattern
pub const ATTACK_ID: &str = "obj_enemy_attack";
/// Registry key of the command menu (main or item list)
pub const MENU_ID: &str = "obj_gui_menu";
/// Registry key of the player slide animation
pub const SLIDE_ID: &str = "obj_slide_player";
/// Registry key of the board resize animation
pub const BOARD_TWEEN_ID: &str = "obj_board_tween";

/// Whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Enemy patterns run, the player moves freely inside the board
    #[default]
    EnemyTurn,
    /// The player picks an action from the menu
    PlayerTurn,
}

/// The player's soul
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Always within `0..=max_health`
    pub health: u32,
    pub max_health: u32,
    pub defense: u32,
    /// Ticks left before the player can be hurt again
    pub invincible_frames: u32,
    /// Length of the window a landed hit starts
    pub invincibility_window: u32,
    pub board_clamping: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start,
            health: tuning.max_health,
            max_health: tuning.max_health,
            defense: tuning.defense,
            invincible_frames: 0,
            invincibility_window: tuning.invincibility_frames,
            board_clamping: true,
        }
    }

    /// Collision box used for bullet hits
    pub fn hurtbox(&self, offset: Vec2, size: Vec2) -> Rect {
        let corner = self.pos + offset;
        Rect::new(corner.x, corner.y, size.x, size.y)
    }

    /// Take a hit of `attack` raw damage.
    ///
    /// Ignored while invincible. Otherwise defense is subtracted (never below
    /// zero damage) and the invincibility window restarts even if nothing was
    /// lost.
    pub fn damage(&mut self, attack: u32) {
        if self.invincible_frames > 0 {
            return;
        }
        let dealt = attack.saturating_sub(self.defense);
        self.health = self.health.saturating_sub(dealt).min(self.max_health);
        self.invincible_frames = self.invincibility_window;
    }

    /// Restore health, capped at `max_health`
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// One tick of invincibility elapses
    pub fn tick_invincibility(&mut self) {
        self.invincible_frames = self.invincible_frames.saturating_sub(1);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// An inventory entry usable from the item menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub heal: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, heal: u32) -> Self {
        Self {
            name: name.into(),
            heal,
        }
    }
}

/// Mutable state visible to entity updates
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    pub player: Player,
    pub board: Rect,
    /// Live bullets in spawn order (collision picks the first match)
    pub bullets: Vec<Bullet>,
    pub phase: TurnPhase,
    pub inventory: Vec<Item>,
    pub encounter: Encounter,
    pub rng: Pcg32,
}

impl World {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Player::new(&tuning),
            board: tuning.board,
            bullets: Vec::new(),
            phase: TurnPhase::EnemyTurn,
            inventory: Vec::new(),
            encounter: Encounter::default(),
            rng: Pcg32::seed_from_u64(tuning.seed),
            tuning,
        }
    }

    pub fn hurtbox(&self) -> Rect {
        self.player
            .hurtbox(self.tuning.hurtbox_offset, self.tuning.hurtbox_size)
    }

    /// Player position for the menu option at `index`
    pub fn menu_anchor(&self, index: usize) -> Vec2 {
        self.tuning.menu_anchor + Vec2::new(0.0, self.tuning.menu_spacing * index as f32)
    }

    /// Remove every bullet emitted by `creator`
    pub fn clear_bullets_of(&mut self, creator: SpawnerId) {
        self.bullets.retain(|b| b.creator != creator);
    }
}

/// Complete battle state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Ticks simulated so far
    pub time_ticks: u64,
    pub world: World,
    pub entities: Registry,
    /// Actions queued during the current update pass
    pub(crate) deferred: Vec<DeferredAction>,
    next_task_id: u64,
    next_spawner_id: u32,
}

impl GameState {
    /// Bare state: player and board only, no entities
    pub fn new(tuning: Tuning) -> Self {
        Self {
            time_ticks: 0,
            world: World::new(tuning),
            entities: Registry::new(),
            deferred: Vec::new(),
            next_task_id: 1,
            next_spawner_id: 1,
        }
    }

    /// Allocate a fresh spawner handle
    pub fn next_spawner_id(&mut self) -> SpawnerId {
        let id = SpawnerId(self.next_spawner_id);
        self.next_spawner_id += 1;
        id
    }

    /// Register a spawner entity under `id` and return its handle
    pub fn add_spawner(&mut self, id: impl Into<EntityId>, config: SpawnerConfig) -> SpawnerId {
        let spawner_id = self.next_spawner_id();
        self.entities.register(
            id,
            Entity::new(EntityKind::Spawner(Spawner::new(spawner_id, config))),
        );
        spawner_id
    }

    /// Run `action` after `delay` more ticks
    pub fn schedule(&mut self, action: DeferredAction, delay: u32) -> EntityId {
        let id = EntityId::from(format!("obj_scheduledtask_{}", self.next_task_id));
        self.next_task_id += 1;
        self.entities.register(
            id.clone(),
            Entity::new(EntityKind::Timer(ScheduledTask::new(action, delay))),
        );
        id
    }

    /// Queue an action for the end of the current update pass
    pub fn defer(&mut self, action: DeferredAction) {
        self.deferred.push(action);
    }

    /// Apply queued actions in order and empty the queue
    pub fn run_deferred(&mut self) {
        let actions = std::mem::take(&mut self.deferred);
        for action in actions {
            action.apply(self);
        }
    }

    /// Handle of the running attack pattern, if any
    pub fn active_attack(&self) -> Option<SpawnerId> {
        match self.entities.get(ATTACK_ID).map(|e| &e.kind) {
            Some(EntityKind::Spawner(spawner)) => Some(spawner.id),
            _ => None,
        }
    }
}
