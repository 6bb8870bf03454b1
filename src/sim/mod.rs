//! Deterministic battle simulation
//!
//! All gameplay logic lives here and stays platform independent:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order)
//! - Drawing goes through the [`crate::renderer::Renderer`] trait

pub mod bullet;
pub mod combat;
pub mod deferred;
pub mod entity;
pub mod menu;
pub mod phase;
pub mod rect;
pub mod scene;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod transition;

pub use bullet::{Bullet, BulletShape, CommonBulletData, SpawnerId};
pub use combat::{first_hit, resolve};
pub use deferred::{DeferredAction, ScheduledTask};
pub use entity::{Decoration, Entity, EntityId, EntityKind, Registry, UpdateContext};
pub use menu::{GuiSelectionTool, HighlightHook, MenuAction, MenuOption};
pub use rect::Rect;
pub use spawner::{CullBounds, CullPolicy, Encounter, Spawner, SpawnerConfig, Wave};
pub use state::{GameState, Item, Player, TurnPhase, World};
pub use tick::tick;
pub use transition::{SmoothTransition, Tween};
