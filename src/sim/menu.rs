//! Vertical option menus
//!
//! [`GuiSelectionTool`] moves a highlight with the up/down edges (wrapping at
//! both ends) and selects the highlighted option on confirm. Selection is the
//! only way a menu changes the game, and it does so through deferred actions.

use glam::Vec2;

use super::deferred::DeferredAction;
use super::entity::{Entity, EntityKind, UpdateContext};
use super::rect::Rect;
use super::state::{GameState, MENU_ID, World};
use crate::consts::{BUTTON_FIRST_Y, BUTTON_HEIGHT, BUTTON_SPACING, BUTTON_WIDTH, BUTTON_X};
use crate::renderer::{Renderer, colors};

/// Index of the Item button in the main menu
const ITEM_OPTION: usize = 2;

/// What selecting an option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Fight,
    Act,
    Item,
    Spare,
    /// Use inventory slot `n`
    UseItem(usize),
    /// Return from the item list to the main menu
    Back,
}

impl MenuAction {
    /// Deferred actions run when this option is selected
    fn actions(self) -> Vec<DeferredAction> {
        match self {
            MenuAction::Fight | MenuAction::Act | MenuAction::Spare => {
                vec![DeferredAction::EnterEnemyTurn]
            }
            MenuAction::Item => vec![DeferredAction::OpenItemMenu],
            MenuAction::UseItem(slot) => {
                vec![DeferredAction::UseItem(slot), DeferredAction::EnterEnemyTurn]
            }
            MenuAction::Back => vec![DeferredAction::OpenMainMenu],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: MenuAction,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// Deferred actions this option runs when chosen
    pub fn select(&self) -> Vec<DeferredAction> {
        self.action.actions()
    }

    fn draw(&self, r: &mut dyn Renderer, base_y: f32, highlighted: bool) {
        let color = if highlighted { colors::YELLOW } else { colors::ORANGE };
        r.save();
        r.translate(Vec2::new(BUTTON_X, base_y));
        r.stroke_rect(Rect::new(0.0, 0.0, BUTTON_WIDTH, BUTTON_HEIGHT), color, 4.0);
        r.fill_text(&self.label, Vec2::new(70.0, 70.0), 56.0, color);
        r.restore();
    }
}

/// Runs whenever the highlight moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightHook {
    #[default]
    None,
    /// Park the player next to the highlighted option
    MovePlayer,
}

#[derive(Debug, Clone)]
pub struct GuiSelectionTool {
    /// Top to bottom
    options: Vec<MenuOption>,
    highlight: Option<usize>,
    pub movement_enabled: bool,
    on_highlight: HighlightHook,
}

impl GuiSelectionTool {
    pub fn new(
        options: Vec<MenuOption>,
        highlight: Option<usize>,
        movement_enabled: bool,
        on_highlight: HighlightHook,
    ) -> Self {
        Self {
            options,
            highlight,
            movement_enabled,
            on_highlight,
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Move the highlight and run the hook
    pub fn set_highlight(&mut self, index: Option<usize>, world: &mut World) {
        self.highlight = index.filter(|&i| i < self.options.len());
        if let (Some(i), HighlightHook::MovePlayer) = (self.highlight, self.on_highlight) {
            world.player.pos = world.menu_anchor(i);
        }
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let len = self.options.len();
        if self.movement_enabled && len > 0 {
            if let Some(current) = self.highlight {
                let input = ctx.input;
                let mut next = current;
                if input.up_pressed {
                    next = if next == 0 { len - 1 } else { next - 1 };
                }
                if input.down_pressed {
                    next = (next + 1) % len;
                }
                if input.up_pressed || input.down_pressed {
                    self.set_highlight(Some(next), ctx.world);
                }
            }
        }

        if ctx.input.confirm_pressed {
            if let Some(option) = self.highlight.and_then(|i| self.options.get(i)) {
                log::info!("Selected {}", option.label);
                for action in option.select() {
                    ctx.defer(action);
                }
            }
        }
    }

    pub(crate) fn draw(&self, r: &mut dyn Renderer) {
        for (i, option) in self.options.iter().enumerate() {
            let base_y = BUTTON_FIRST_Y + BUTTON_SPACING * i as f32;
            option.draw(r, base_y, self.highlight == Some(i));
        }
    }
}

fn main_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new("FIGHT", MenuAction::Fight),
        MenuOption::new("ACT", MenuAction::Act),
        MenuOption::new("ITEM", MenuAction::Item),
        MenuOption::new("SPARE", MenuAction::Spare),
    ]
}

/// Install the Fight/Act/Item/Spare menu
pub fn open_main_menu(state: &mut GameState, movement_enabled: bool, highlight: Option<usize>) {
    let mut menu = GuiSelectionTool::new(
        main_options(),
        None,
        movement_enabled,
        HighlightHook::MovePlayer,
    );
    menu.set_highlight(highlight, &mut state.world);
    state
        .entities
        .register(MENU_ID, Entity::new(EntityKind::Menu(menu)));
}

/// Swap the main menu for the inventory list
pub fn open_item_menu(state: &mut GameState) {
    let mut options: Vec<_> = state
        .world
        .inventory
        .iter()
        .enumerate()
        .map(|(slot, item)| MenuOption::new(item.name.to_uppercase(), MenuAction::UseItem(slot)))
        .collect();
    options.push(MenuOption::new("BACK", MenuAction::Back));

    let mut menu = GuiSelectionTool::new(options, None, true, HighlightHook::MovePlayer);
    menu.set_highlight(Some(0), &mut state.world);
    state
        .entities
        .register(MENU_ID, Entity::new(EntityKind::Menu(menu)));
}

/// Main menu with the highlight back on Item
pub(crate) fn return_to_main_menu(state: &mut GameState) {
    open_main_menu(state, true, Some(ITEM_OPTION));
}
