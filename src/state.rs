//! Whole-application state, owned by the main loop.
//!
//! There are no globals: the loop owns one [`AppState`] and passes it
//! explicitly to the input handler and (via the menu) to the renderer, keeping
//! single-writer semantics obvious.

use crate::input::AnalogDirection;
use crate::menu::MenuModel;

/// State threaded through every frame of the application loop.
pub struct AppState {
    /// True while the loop should keep running. Cleared at most once, by a
    /// quit signal, the B shortcut, the Cancel action, or a power action.
    pub running: bool,

    /// The fixed three-item menu and its selection.
    pub menu: MenuModel,

    /// Last analog-stick direction past the threshold. Debounces the stick so
    /// holding it produces one selection step per threshold crossing.
    pub analog: AnalogDirection,
}

impl AppState {
    /// Fresh state: running, selection on the first item, stick neutral.
    pub fn new() -> Self {
        Self {
            running: true,
            menu: MenuModel::new(),
            analog: AnalogDirection::Neutral,
        }
    }
}

impl Default for AppState {
    fn default() -> Self { Self::new() }
}
