//! The fixed three-item menu: Reboot, Power off, Cancel.
//!
//! The items are created once at startup and never added or removed. Each item
//! carries the [`MenuAction`] it triggers, so dispatching matches on a closed
//! enum instead of interpreting a bare index.
//!
//! # Selection invariant
//!
//! Exactly one item has `selected == true` at all times. The selection index
//! is the source of truth; the per-item flags are kept in sync by
//! [`MenuModel::select`] so the renderer can read them directly.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{BUTTON_HEIGHT, BUTTON_WIDTH, BUTTON_X, BUTTON_YS};
use crate::geometry::point_in_rect;

/// Number of menu items. Fixed by design.
pub const MENU_ITEM_COUNT: usize = 3;

/// Effect triggered by activating a menu item.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuAction {
    /// Reboot the console via the power-state service.
    Reboot,
    /// Power the console off via the power-state service.
    PowerOff,
    /// Leave the menu without touching the power state.
    RequestExit,
}

/// One menu button: fixed bounds and label, plus the live selection flag.
pub struct MenuItem {
    /// Button rectangle in screen pixels. Immutable after creation.
    pub bounds: Rectangle,
    /// Display label. Immutable after creation.
    pub label: &'static str,
    /// Effect triggered when this item is activated.
    pub action: MenuAction,
    /// True for exactly one item; kept in sync with the model's index.
    pub selected: bool,
}

/// The ordered three-item list and its selection index.
pub struct MenuModel {
    items: [MenuItem; MENU_ITEM_COUNT],
    selected: usize,
}

impl MenuModel {
    /// Build the fixed menu with the first item (Reboot) selected.
    pub fn new() -> Self {
        const ENTRIES: [(&str, MenuAction); MENU_ITEM_COUNT] = [
            ("Reboot", MenuAction::Reboot),
            ("Power off", MenuAction::PowerOff),
            ("Cancel", MenuAction::RequestExit),
        ];
        let items = std::array::from_fn(|row| {
            let (label, action) = ENTRIES[row];
            MenuItem {
                bounds: Rectangle::new(
                    Point::new(BUTTON_X, BUTTON_YS[row]),
                    Size::new(BUTTON_WIDTH, BUTTON_HEIGHT),
                ),
                label,
                action,
                selected: false,
            }
        });

        let mut menu = Self { items, selected: 0 };
        menu.select(0);
        menu
    }

    /// Change the selection to `index`.
    ///
    /// Idempotent when `index` is already selected. Out-of-range indices are a
    /// programmer error; input handling only ever produces indices in range.
    pub fn select(
        &mut self,
        index: usize,
    ) {
        assert!(index < MENU_ITEM_COUNT, "selection index out of range: {index}");
        self.items[self.selected].selected = false;
        self.selected = index;
        self.items[self.selected].selected = true;
    }

    /// Move the selection one item up, clamping at the top (no wrap).
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.select(self.selected - 1);
        }
    }

    /// Move the selection one item down, clamping at the bottom (no wrap).
    pub fn move_down(&mut self) {
        if self.selected < MENU_ITEM_COUNT - 1 {
            self.select(self.selected + 1);
        }
    }

    /// Index of the item containing `point`, if any.
    ///
    /// Items are tested in list order; the bounds do not overlap by
    /// construction, but if they did the lowest index would win.
    pub fn hit_test(
        &self,
        point: Point,
    ) -> Option<usize> {
        self.items.iter().position(|item| point_in_rect(point, &item.bounds))
    }

    /// Currently selected index, always in `0..MENU_ITEM_COUNT`.
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Action of the currently selected item.
    pub const fn selected_action(&self) -> MenuAction {
        self.items[self.selected].action
    }

    /// All items in display order, for rendering.
    pub const fn items(&self) -> &[MenuItem; MENU_ITEM_COUNT] {
        &self.items
    }
}

impl Default for MenuModel {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
