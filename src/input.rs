//! Input event model and per-event handling.
//!
//! The platform queue is drained without blocking once per frame; every event
//! either mutates the [`AppState`] (selection moves, exit requests) or
//! produces an [`Activation`] for the loop to dispatch.
//!
//! # Event sources
//!
//! - Touch presses arrive with coordinates normalized to `[0, 1]` and are
//!   scaled to the fixed 1280x720 screen before hit-testing. A touch that
//!   lands on a button both selects and activates it.
//! - Pointer (mouse) presses are already in screen space and are hit-test
//!   only: they neither change the selection nor activate anything. The
//!   asymmetry is deliberate, kept for desktop testing where a stray click
//!   must not power the machine off.
//! - Controller buttons are identified by the console's numeric codes.
//! - Analog stick motion is debounced through a direction latch so a held
//!   stick produces exactly one selection step per threshold crossing.

use embedded_graphics::prelude::*;

use crate::config::{ANALOG_THRESHOLD, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::menu::MenuAction;
use crate::state::AppState;

// =============================================================================
// Controller Codes
// =============================================================================

/// Primary confirm button (A).
pub const BUTTON_A: u8 = 0;

/// Cancel/back button (B). Exits the menu directly.
pub const BUTTON_B: u8 = 1;

/// D-pad up.
pub const BUTTON_DPAD_UP: u8 = 13;

/// D-pad down.
pub const BUTTON_DPAD_DOWN: u8 = 15;

/// Vertical axis of the left stick.
pub const AXIS_LEFT_STICK_Y: u8 = 1;

/// Vertical axis of the right stick.
pub const AXIS_RIGHT_STICK_Y: u8 = 3;

// =============================================================================
// Event Model
// =============================================================================

/// One event drained from the platform queue.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputEvent {
    /// External request to close (window close, HOME-menu kill).
    Quit,
    /// Finger down, coordinates normalized to `[0, 1]` in both axes.
    TouchPress { x: f32, y: f32 },
    /// Mouse button down, coordinates already in screen pixels.
    PointerPress { x: i32, y: i32 },
    /// Controller button down, identified by its numeric code.
    ButtonDown(u8),
    /// Analog stick motion on one axis, signed 16-bit deflection.
    AxisMotion { axis: u8, value: i16 },
}

/// Debounce latch for analog-stick selection steps.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnalogDirection {
    /// Stick inside the threshold band; the next crossing will step.
    Neutral,
    /// Stick held past the threshold upwards; further up motion is ignored.
    Up,
    /// Stick held past the threshold downwards; further down motion is ignored.
    Down,
}

/// A request to dispatch the action of a menu item.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Activation {
    /// The action to dispatch.
    pub action: MenuAction,
    /// True for touch-triggered activations, which must wait out the settle
    /// delay before dispatching (the power-state service crashes when hit
    /// mid-transition).
    pub touch_settle: bool,
}

// =============================================================================
// Event Handling
// =============================================================================

/// Drain a batch of pending events into the state.
///
/// Returns the activation produced by the batch, if any. Events are handled in
/// arrival order; state mutations from earlier events are visible to later
/// ones.
pub fn drain<I>(
    state: &mut AppState,
    events: I,
) -> Option<Activation>
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut activation = None;
    for event in events {
        if let Some(act) = handle_event(state, event) {
            activation = Some(act);
        }
    }
    activation
}

/// Handle a single event, mutating `state` and possibly producing an
/// [`Activation`] for the loop to dispatch.
pub fn handle_event(
    state: &mut AppState,
    event: InputEvent,
) -> Option<Activation> {
    match event {
        InputEvent::Quit => {
            tracing::info!("quit signal received, exiting");
            state.running = false;
            None
        }
        InputEvent::TouchPress { x, y } => {
            // Touch coordinates are normalized; scale to screen pixels
            let point = Point::new(
                (x * SCREEN_WIDTH as f32) as i32,
                (y * SCREEN_HEIGHT as f32) as i32,
            );
            tracing::debug!(x = point.x, y = point.y, "touch press");
            let hit = state.menu.hit_test(point)?;
            tracing::info!(button = hit, "button touched");
            state.menu.select(hit);
            Some(Activation {
                action: state.menu.selected_action(),
                touch_settle: true,
            })
        }
        InputEvent::PointerPress { x, y } => {
            // Hit-test only: pointer presses exist for desktop testing and
            // must not change the selection or trigger an action.
            let point = Point::new(x, y);
            tracing::debug!(x, y, hit = ?state.menu.hit_test(point), "pointer press");
            None
        }
        InputEvent::ButtonDown(code) => handle_button(state, code),
        InputEvent::AxisMotion { axis, value } => {
            handle_axis(state, axis, value);
            None
        }
    }
}

/// Handle a controller button press.
fn handle_button(
    state: &mut AppState,
    code: u8,
) -> Option<Activation> {
    match code {
        BUTTON_A => {
            tracing::info!(selected = state.menu.selected_index(), "A pressed, activating selection");
            Some(Activation {
                action: state.menu.selected_action(),
                touch_settle: false,
            })
        }
        BUTTON_B => {
            // Shortcut: exits directly, without going through the Cancel item
            tracing::info!("B pressed, exiting");
            state.running = false;
            None
        }
        BUTTON_DPAD_UP => {
            state.menu.move_up();
            tracing::debug!(selected = state.menu.selected_index(), "d-pad up");
            None
        }
        BUTTON_DPAD_DOWN => {
            state.menu.move_down();
            tracing::debug!(selected = state.menu.selected_index(), "d-pad down");
            None
        }
        other => {
            tracing::trace!(code = other, "unmapped button ignored");
            None
        }
    }
}

/// Handle analog stick motion on one axis.
///
/// Only the vertical axes of either stick are considered. Each crossing of the
/// threshold band produces one selection step; the latch updates even when the
/// step clamps at an end of the list, so a held stick never repeats.
fn handle_axis(
    state: &mut AppState,
    axis: u8,
    value: i16,
) {
    if axis != AXIS_LEFT_STICK_Y && axis != AXIS_RIGHT_STICK_Y {
        return;
    }

    if value < -ANALOG_THRESHOLD && state.analog != AnalogDirection::Up {
        state.menu.move_up();
        state.analog = AnalogDirection::Up;
        tracing::debug!(selected = state.menu.selected_index(), "analog up");
    } else if value > ANALOG_THRESHOLD && state.analog != AnalogDirection::Down {
        state.menu.move_down();
        state.analog = AnalogDirection::Down;
        tracing::debug!(selected = state.menu.selected_index(), "analog down");
    } else if value > -ANALOG_THRESHOLD && value < ANALOG_THRESHOLD {
        // Back inside the band: arm the next crossing
        state.analog = AnalogDirection::Neutral;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BUTTON_HEIGHT, BUTTON_WIDTH, BUTTON_X, BUTTON_YS};

    fn assert_selection_consistent(state: &AppState) {
        let flagged = state.menu.items().iter().filter(|item| item.selected).count();
        assert_eq!(flagged, 1, "Exactly one item should be selected");
    }

    /// Normalized touch coordinates for the center of button `index`.
    fn touch_at_button(index: usize) -> InputEvent {
        let cx = BUTTON_X as f32 + BUTTON_WIDTH as f32 / 2.0;
        let cy = BUTTON_YS[index] as f32 + BUTTON_HEIGHT as f32 / 2.0;
        InputEvent::TouchPress {
            x: cx / crate::config::SCREEN_WIDTH as f32,
            y: cy / crate::config::SCREEN_HEIGHT as f32,
        }
    }

    // -------------------------------------------------------------------------
    // Quit Handling
    // -------------------------------------------------------------------------

    #[test]
    fn test_quit_clears_running() {
        let mut state = AppState::new();
        let activation = handle_event(&mut state, InputEvent::Quit);
        assert!(activation.is_none(), "Quit should not produce an activation");
        assert!(!state.running, "Quit should clear the running flag");
    }

    // -------------------------------------------------------------------------
    // Touch Handling
    // -------------------------------------------------------------------------

    #[test]
    fn test_touch_on_reboot_selects_and_activates() {
        let mut state = AppState::new();
        state.menu.select(2); // start elsewhere so the selection change is visible

        let activation = handle_event(&mut state, touch_at_button(0));

        assert_eq!(state.menu.selected_index(), 0, "Touch should select before activating");
        assert_selection_consistent(&state);
        let activation = activation.expect("Touch on a button should activate it");
        assert_eq!(activation.action, MenuAction::Reboot);
        assert!(activation.touch_settle, "Touch activations need the settle delay");
    }

    #[test]
    fn test_touch_on_cancel_activates_exit() {
        let mut state = AppState::new();
        let activation = handle_event(&mut state, touch_at_button(2)).expect("Touch should activate");
        assert_eq!(activation.action, MenuAction::RequestExit);
        assert_eq!(state.menu.selected_index(), 2);
    }

    #[test]
    fn test_touch_outside_buttons_does_nothing() {
        let mut state = AppState::new();
        // Top-left screen corner is well outside every button
        let activation = handle_event(&mut state, InputEvent::TouchPress { x: 0.0, y: 0.0 });
        assert!(activation.is_none(), "Touch in empty space should not activate");
        assert_eq!(state.menu.selected_index(), 0, "Selection should be unchanged");
        assert!(state.running);
    }

    #[test]
    fn test_pointer_press_is_hit_test_only() {
        let mut state = AppState::new();
        // Screen-space press right in the middle of the Power off button
        let activation = handle_event(
            &mut state,
            InputEvent::PointerPress { x: BUTTON_X + 10, y: BUTTON_YS[1] + 10 },
        );
        assert!(activation.is_none(), "Pointer presses must not activate");
        assert_eq!(state.menu.selected_index(), 0, "Pointer presses must not select");
    }

    // -------------------------------------------------------------------------
    // Controller Buttons
    // -------------------------------------------------------------------------

    #[test]
    fn test_button_a_activates_current_selection() {
        let mut state = AppState::new();
        state.menu.select(1);
        let activation =
            handle_event(&mut state, InputEvent::ButtonDown(BUTTON_A)).expect("A should activate");
        assert_eq!(activation.action, MenuAction::PowerOff);
        assert!(!activation.touch_settle, "Button activations do not need the settle delay");
    }

    #[test]
    fn test_button_b_exits_without_activation() {
        for index in 0..3 {
            let mut state = AppState::new();
            state.menu.select(index);
            let activation = handle_event(&mut state, InputEvent::ButtonDown(BUTTON_B));
            assert!(activation.is_none(), "B must not go through the dispatcher");
            assert!(!state.running, "B should clear the running flag at selection {index}");
        }
    }

    #[test]
    fn test_dpad_up_clamps_at_top() {
        let mut state = AppState::new();
        handle_event(&mut state, InputEvent::ButtonDown(BUTTON_DPAD_UP));
        assert_eq!(state.menu.selected_index(), 0, "Up from 0 should stay at 0");
        assert_selection_consistent(&state);
    }

    #[test]
    fn test_dpad_down_clamps_at_bottom() {
        let mut state = AppState::new();
        state.menu.select(2);
        handle_event(&mut state, InputEvent::ButtonDown(BUTTON_DPAD_DOWN));
        assert_eq!(state.menu.selected_index(), 2, "Down from 2 should stay at 2");
    }

    #[test]
    fn test_dpad_down_down_down_up() {
        let mut state = AppState::new();
        for _ in 0..3 {
            handle_event(&mut state, InputEvent::ButtonDown(BUTTON_DPAD_DOWN));
        }
        handle_event(&mut state, InputEvent::ButtonDown(BUTTON_DPAD_UP));
        assert_eq!(state.menu.selected_index(), 1, "Two downs clamp at 2, one up lands on 1");
        assert_selection_consistent(&state);
    }

    #[test]
    fn test_unmapped_button_is_ignored() {
        let mut state = AppState::new();
        let activation = handle_event(&mut state, InputEvent::ButtonDown(7));
        assert!(activation.is_none());
        assert!(state.running);
        assert_eq!(state.menu.selected_index(), 0);
    }

    // -------------------------------------------------------------------------
    // Analog Stick
    // -------------------------------------------------------------------------

    #[test]
    fn test_analog_down_steps_once_while_held() {
        let mut state = AppState::new();
        // Two consecutive readings past the threshold without returning to the
        // band: only the first may step
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: 9000 });
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: 9500 });
        assert_eq!(state.menu.selected_index(), 1, "Held stick should step exactly once");
        assert_eq!(state.analog, AnalogDirection::Down);
    }

    #[test]
    fn test_analog_rearms_after_returning_to_band() {
        let mut state = AppState::new();
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: 9000 });
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: 500 });
        assert_eq!(state.analog, AnalogDirection::Neutral, "Band re-entry should re-arm");
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: 9000 });
        assert_eq!(state.menu.selected_index(), 2, "Second crossing should step again");
    }

    #[test]
    fn test_analog_up_moves_selection_up() {
        let mut state = AppState::new();
        state.menu.select(2);
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_RIGHT_STICK_Y, value: -9000 });
        assert_eq!(state.menu.selected_index(), 1);
        assert_eq!(state.analog, AnalogDirection::Up);
    }

    #[test]
    fn test_analog_latches_even_when_clamped() {
        let mut state = AppState::new();
        // Up from the top item: no movement, but the latch still engages so
        // releasing and pushing again does not surprise-step later
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: -9000 });
        assert_eq!(state.menu.selected_index(), 0);
        assert_eq!(state.analog, AnalogDirection::Up);
    }

    #[test]
    fn test_analog_direction_reversal_steps_without_band_return() {
        let mut state = AppState::new();
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: 9000 });
        assert_eq!(state.menu.selected_index(), 1);
        // Flick straight from full down to full up: direction changed, so this steps
        handle_event(&mut state, InputEvent::AxisMotion { axis: AXIS_LEFT_STICK_Y, value: -9000 });
        assert_eq!(state.menu.selected_index(), 0);
        assert_eq!(state.analog, AnalogDirection::Up);
    }

    #[test]
    fn test_horizontal_axes_are_ignored() {
        let mut state = AppState::new();
        handle_event(&mut state, InputEvent::AxisMotion { axis: 0, value: 20000 });
        handle_event(&mut state, InputEvent::AxisMotion { axis: 2, value: 20000 });
        assert_eq!(state.menu.selected_index(), 0);
        assert_eq!(state.analog, AnalogDirection::Neutral);
    }

    // -------------------------------------------------------------------------
    // Batch Draining
    // -------------------------------------------------------------------------

    #[test]
    fn test_drain_handles_events_in_order() {
        let mut state = AppState::new();
        let activation = drain(
            &mut state,
            [
                InputEvent::ButtonDown(BUTTON_DPAD_DOWN),
                InputEvent::ButtonDown(BUTTON_DPAD_DOWN),
                InputEvent::ButtonDown(BUTTON_A),
            ],
        );
        // Two downs land on Cancel, then A activates it
        let activation = activation.expect("A at the end of the batch should activate");
        assert_eq!(activation.action, MenuAction::RequestExit);
        assert_eq!(state.menu.selected_index(), 2);
    }

    #[test]
    fn test_drain_empty_batch() {
        let mut state = AppState::new();
        assert!(drain(&mut state, []).is_none());
        assert!(state.running);
    }
}
