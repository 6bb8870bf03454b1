//! Entities and the insertion-ordered registry
//!
//! An entity is one of a closed set of kinds, each with its own optional
//! update and draw behavior. Registry order is both update order and draw
//! (z) order.

use std::fmt;

use glam::Vec2;

use super::deferred::{DeferredAction, ScheduledTask};
use super::menu::GuiSelectionTool;
use super::spawner::Spawner;
use super::state::World;
use super::transition::SmoothTransition;
use crate::consts::{ENEMY_IMAGE_ID, ENEMY_SPRITE_X, ENEMY_SPRITE_Y};
use crate::platform::InputState;
use crate::renderer::{Renderer, colors};
use crate::sim::Rect;

/// Registry key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an entity update may touch
pub struct UpdateContext<'a> {
    pub world: &'a mut World,
    pub input: &'a InputState,
    deferred: &'a mut Vec<DeferredAction>,
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        world: &'a mut World,
        input: &'a InputState,
        deferred: &'a mut Vec<DeferredAction>,
    ) -> Self {
        Self {
            world,
            input,
            deferred,
        }
    }

    /// Run `action` once the update pass is over
    pub fn defer(&mut self, action: DeferredAction) {
        self.deferred.push(action);
    }
}

/// Static scenery that only draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    EnemySprite,
    HealthBar,
    BulletBoard,
}

impl Decoration {
    fn draw(&self, world: &World, r: &mut dyn Renderer) {
        match self {
            Decoration::EnemySprite => {
                r.draw_image(ENEMY_IMAGE_ID, Vec2::new(ENEMY_SPRITE_X, ENEMY_SPRITE_Y));
            }
            Decoration::HealthBar => {
                let player = &world.player;
                // 4 px per point of max health
                let full = player.max_health as f32 * 4.0;
                r.fill_rect(Rect::new(620.0, 1020.0, full, 40.0), colors::RED);
                r.fill_rect(
                    Rect::new(620.0, 1020.0, player.health as f32 * 4.0, 40.0),
                    colors::YELLOW,
                );
                let label = format!("{:02} / {}", player.health, player.max_health);
                r.fill_text(&label, Vec2::new(620.0 + full + 30.0, 1055.0), 48.0, colors::WHITE);
            }
            Decoration::BulletBoard => {
                r.stroke_rect(world.board, colors::WHITE, 10.0);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum EntityKind {
    /// One-shot scheduled action
    Timer(ScheduledTask),
    /// Bullet pattern
    Spawner(Spawner),
    /// Vertical option menu
    Menu(GuiSelectionTool),
    /// Value animation that removes itself when done
    Transition(SmoothTransition),
    Decoration(Decoration),
}

#[derive(Debug, Clone)]
pub struct Entity {
    /// Hidden entities still update but are skipped by the draw pass
    pub visible: bool,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            visible: true,
            kind,
        }
    }

    pub fn update(&mut self, id: &EntityId, ctx: &mut UpdateContext<'_>) {
        match &mut self.kind {
            EntityKind::Timer(task) => task.update(id, ctx),
            EntityKind::Spawner(spawner) => spawner.update(ctx),
            EntityKind::Menu(menu) => menu.update(ctx),
            EntityKind::Transition(transition) => transition.update(id, ctx),
            EntityKind::Decoration(_) => {}
        }
    }

    pub fn draw(&self, world: &World, r: &mut dyn Renderer) {
        match &self.kind {
            EntityKind::Menu(menu) => menu.draw(r),
            EntityKind::Decoration(decoration) => decoration.draw(world, r),
            EntityKind::Timer(_) | EntityKind::Spawner(_) | EntityKind::Transition(_) => {}
        }
    }

    pub fn as_menu_mut(&mut self) -> Option<&mut GuiSelectionTool> {
        match &mut self.kind {
            EntityKind::Menu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn as_menu(&self) -> Option<&GuiSelectionTool> {
        match &self.kind {
            EntityKind::Menu(menu) => Some(menu),
            _ => None,
        }
    }
}

/// Insertion-ordered map from id to entity.
///
/// Structural changes need `&mut Registry`, so they cannot happen while an
/// update pass holds the entries; updates queue a [`DeferredAction`] instead.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(EntityId, Entity)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity`. An existing id is replaced in place, keeping its slot.
    pub fn register(&mut self, id: impl Into<EntityId>, entity: Entity) {
        let id = id.into();
        match self.position(id.as_str()) {
            Some(i) => self.entries[i].1 = entity,
            None => self.entries.push((id, entity)),
        }
    }

    pub fn unregister(&mut self, id: &str) -> Option<Entity> {
        let i = self.position(id)?;
        Some(self.entries.remove(i).1)
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entries.iter().find(|(k, _)| k.as_str() == id).map(|(_, e)| e)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k.as_str() == id)
            .map(|(_, e)| e)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Entity)> {
        self.entries.iter().map(|(id, e)| (id, e))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&EntityId, &mut Entity)> {
        self.entries.iter_mut().map(|(id, e)| (&*id, e))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_str() == id)
    }
}
