//! Bullet spawners: pattern entities that emit, move and cull their bullets
//!
//! Each spawner owns the bullets tagged with its [`SpawnerId`]. A counter
//! cycles through `0..period` and a new wave fires whenever it wraps to 0.

use glam::Vec2;
use rand::Rng;

use super::bullet::{Bullet, CommonBulletData, SpawnerId};
use super::deferred::DeferredAction;
use super::entity::UpdateContext;
use super::rect::Rect;
use super::state::{TurnPhase, World};
use crate::consts::SCREEN_WIDTH;

/// How many escaped bullets a spawner removes per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullPolicy {
    /// Only the first escaped bullet (paces removal one per tick)
    CullFirst,
    /// Every escaped bullet
    CullAll,
}

/// Where a bullet's anchor must stay to survive culling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CullBounds {
    /// Inside the board as it is on the current tick (edges inclusive)
    Board,
    /// Strictly right of this x (a bullet at the edge is culled)
    RightOf(f32),
}

impl CullBounds {
    fn keeps(&self, anchor: Vec2, board: &Rect) -> bool {
        match *self {
            CullBounds::Board => board.contains_point(anchor),
            CullBounds::RightOf(edge) => anchor.x > edge,
        }
    }
}

/// Shape of one emitted wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wave {
    /// A single circular bullet dropped from the top edge of the board
    Drop { x: f32, radius: f32, attack: u32 },
    /// A column of rectangles from `y_start` to `y_end` with one random gap
    Wall {
        x: f32,
        y_start: f32,
        y_end: f32,
        step: f32,
        size: Vec2,
        attack: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerConfig {
    /// Ticks between waves
    pub period: u32,
    /// Fire on the first update instead of after a full period
    pub fire_immediately: bool,
    /// Displacement of every owned bullet per tick
    pub velocity: Vec2,
    pub cull: CullPolicy,
    pub cull_bounds: CullBounds,
    /// Ticks before the attack ends and the player's turn starts
    pub duration: Option<u32>,
    /// Only run during this phase
    pub active_in: Option<TurnPhase>,
    /// Board the pattern is played on, enforced every tick
    pub board: Option<Rect>,
    pub wave: Wave,
}

impl SpawnerConfig {
    /// Circles falling straight down the board
    pub fn rain() -> Self {
        Self {
            period: 20,
            fire_immediately: false,
            velocity: Vec2::new(0.0, 4.0),
            cull: CullPolicy::CullFirst,
            cull_bounds: CullBounds::Board,
            duration: Some(200),
            active_in: Some(TurnPhase::EnemyTurn),
            board: None,
            wave: Wave::Drop {
                x: 415.0,
                radius: 10.0,
                attack: 2,
            },
        }
    }

    /// Walls with a single hole rushing in from the right
    pub fn wall() -> Self {
        Self {
            period: 60,
            fire_immediately: true,
            velocity: Vec2::new(-10.0, 0.0),
            cull: CullPolicy::CullAll,
            cull_bounds: CullBounds::RightOf(0.0),
            // Counter runs 0..=320, one value per update
            duration: Some(321),
            active_in: Some(TurnPhase::EnemyTurn),
            board: Some(Rect::new(360.0, 510.0, 720.0, 490.0)),
            wave: Wave::Wall {
                x: SCREEN_WIDTH,
                y_start: 520.0,
                y_end: 930.0,
                step: 80.0,
                size: Vec2::new(40.0, 70.0),
                attack: 4,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spawner {
    pub id: SpawnerId,
    pub config: SpawnerConfig,
    /// Cycles `0..period`; a wave fires when it wraps to 0
    counter: u32,
    /// Updates run so far, compared against `duration`
    elapsed: u32,
    finished: bool,
}

impl Spawner {
    pub fn new(id: SpawnerId, config: SpawnerConfig) -> Self {
        let period = config.period.max(1);
        let counter = if config.fire_immediately { period - 1 } else { 0 };
        Self {
            id,
            config: SpawnerConfig { period, ..config },
            counter,
            elapsed: 0,
            finished: false,
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.finished {
            return;
        }
        if self.config.active_in.is_some_and(|phase| phase != ctx.world.phase) {
            return;
        }
        if self.config.duration.is_some_and(|duration| self.elapsed >= duration) {
            self.finished = true;
            ctx.defer(DeferredAction::EnterPlayerTurn { from: self.id });
            return;
        }

        self.elapsed += 1;
        self.counter = (self.counter + 1) % self.config.period;

        let world = &mut *ctx.world;
        if let Some(board) = self.config.board {
            world.board = board;
        }

        let velocity = self.config.velocity;
        for bullet in world.bullets.iter_mut().filter(|b| b.creator == self.id) {
            bullet.translate(velocity);
        }

        self.cull(world);

        if self.counter == 0 {
            self.fire(world);
        }
    }

    fn cull(&self, world: &mut World) {
        let bounds = self.config.cull_bounds;
        let board = world.board;
        let id = self.id;
        let escaped = |b: &Bullet| b.creator == id && !bounds.keeps(b.anchor(), &board);

        match self.config.cull {
            CullPolicy::CullFirst => {
                if let Some(i) = world.bullets.iter().position(escaped) {
                    world.bullets.remove(i);
                    log::debug!("{:?} culled one bullet", id);
                }
            }
            CullPolicy::CullAll => {
                let before = world.bullets.len();
                world.bullets.retain(|b| !escaped(b));
                let culled = before - world.bullets.len();
                if culled > 0 {
                    log::debug!("{:?} culled {} bullets", id, culled);
                }
            }
        }
    }

    fn fire(&self, world: &mut World) {
        match self.config.wave {
            Wave::Drop { x, radius, attack } => {
                world.bullets.push(Bullet::circular(
                    Vec2::new(x, world.board.top()),
                    radius,
                    CommonBulletData::new(attack),
                    self.id,
                ));
            }
            Wave::Wall {
                x,
                y_start,
                y_end,
                step,
                size,
                attack,
            } => {
                let mut column = Vec::new();
                let mut y = y_start;
                while y <= y_end {
                    column.push(Bullet::rectangular(
                        Rect::new(x, y, size.x, size.y),
                        CommonBulletData::new(attack),
                        self.id,
                    ));
                    y += step.max(1.0);
                }
                if !column.is_empty() {
                    let gap = world.rng.random_range(0..column.len());
                    column.remove(gap);
                }
                world.bullets.extend(column);
            }
        }
        log::debug!("{:?} fired a wave ({} bullets live)", self.id, world.bullets.len());
    }
}

/// Attack patterns the enemy cycles through, one per enemy turn
#[derive(Debug, Clone, Default)]
pub struct Encounter {
    pub attacks: Vec<SpawnerConfig>,
    next: usize,
}

impl Encounter {
    pub fn new(attacks: Vec<SpawnerConfig>) -> Self {
        Self { attacks, next: 0 }
    }

    /// The next attack, wrapping around; `None` if there are no attacks
    pub fn next_attack(&mut self) -> Option<SpawnerConfig> {
        if self.attacks.is_empty() {
            return None;
        }
        let attack = self.attacks[self.next % self.attacks.len()].clone();
        self.next = (self.next + 1) % self.attacks.len();
        Some(attack)
    }
}
