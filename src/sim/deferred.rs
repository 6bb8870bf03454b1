//! Deferred actions and scheduled tasks
//!
//! Updates never change the registry directly. They queue one of these
//! actions, which run in queue order after the whole update pass.

use super::bullet::SpawnerId;
use super::entity::{Entity, EntityId, UpdateContext};
use super::state::{GameState, MENU_ID};
use super::{menu, phase};

#[derive(Debug, Clone)]
pub enum DeferredAction {
    Unregister(EntityId),
    /// Highlight an option of the command menu
    HighlightMenu(usize),
    /// The attack pattern `from` has finished
    EnterPlayerTurn { from: SpawnerId },
    EnterEnemyTurn,
    OpenItemMenu,
    OpenMainMenu,
    /// Consume inventory slot `index`
    UseItem(usize),
    SetBoardClamping(bool),
}

impl DeferredAction {
    pub fn apply(self, state: &mut GameState) {
        match self {
            DeferredAction::Unregister(id) => {
                state.entities.unregister(id.as_str());
            }
            DeferredAction::HighlightMenu(index) => {
                let world = &mut state.world;
                if let Some(menu) = state.entities.get_mut(MENU_ID).and_then(Entity::as_menu_mut) {
                    menu.set_highlight(Some(index), world);
                }
            }
            DeferredAction::EnterPlayerTurn { from } => phase::enter_player_turn(state, from),
            DeferredAction::EnterEnemyTurn => phase::enter_enemy_turn(state),
            DeferredAction::OpenItemMenu => menu::open_item_menu(state),
            DeferredAction::OpenMainMenu => menu::return_to_main_menu(state),
            DeferredAction::UseItem(index) => {
                if index < state.world.inventory.len() {
                    let item = state.world.inventory.remove(index);
                    state.world.player.heal(item.heal);
                    log::info!(
                        "Used {} (+{} HP, now {})",
                        item.name,
                        item.heal,
                        state.world.player.health
                    );
                } else {
                    log::warn!("No item in slot {}", index);
                }
            }
            DeferredAction::SetBoardClamping(enabled) => {
                state.world.player.board_clamping = enabled;
            }
        }
    }
}

/// Fires its action once its countdown reaches zero, then removes itself
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    remaining: u32,
    action: Option<DeferredAction>,
}

impl ScheduledTask {
    pub fn new(action: DeferredAction, delay: u32) -> Self {
        Self {
            remaining: delay,
            action: Some(action),
        }
    }

    pub(crate) fn update(&mut self, id: &EntityId, ctx: &mut UpdateContext<'_>) {
        if self.remaining > 0 {
            self.remaining -= 1;
            return;
        }
        if let Some(action) = self.action.take() {
            ctx.defer(action);
            ctx.defer(DeferredAction::Unregister(id.clone()));
        }
    }
}
