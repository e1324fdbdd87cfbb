//! Window wrapper: frame presentation and translation of backend events into
//! the application's [`InputEvent`] model.
//!
//! On the desktop the backend delivers keyboard and mouse input, so keyboard
//! keys stand in for the console's physical buttons: `A`/`Return` confirm,
//! `B`/`Escape` cancel, the arrow keys move the selection. Mouse presses map
//! to [`InputEvent::PointerPress`], which the input handler treats as
//! hit-test only. Key repeats are ignored; selection stepping is one press,
//! one step.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::input::{
    BUTTON_A, BUTTON_B, BUTTON_DPAD_DOWN, BUTTON_DPAD_UP, InputEvent,
};

/// The menu's window: owns the backend window and its event pump.
pub struct MenuWindow {
    window: Window,
}

impl MenuWindow {
    /// Create the window at the fixed screen size (1:1 pixel scale).
    pub fn new(title: &str) -> Self {
        let output_settings = OutputSettingsBuilder::new().build();
        Self { window: Window::new(title, &output_settings) }
    }

    /// Present a composed frame. Pacing is governed by the backend.
    pub fn present(
        &mut self,
        display: &SimulatorDisplay<Rgb888>,
    ) {
        self.window.update(display);
    }

    /// Drain all currently pending events without blocking.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        self.window.events().filter_map(map_event).collect()
    }
}

/// Translate one backend event, dropping anything the menu does not consume.
fn map_event(event: SimulatorEvent) -> Option<InputEvent> {
    match event {
        SimulatorEvent::Quit => Some(InputEvent::Quit),
        SimulatorEvent::KeyDown { keycode, repeat, .. } => {
            if repeat {
                return None;
            }
            let code = match keycode {
                Keycode::A | Keycode::Return => BUTTON_A,
                Keycode::B | Keycode::Escape => BUTTON_B,
                Keycode::Up => BUTTON_DPAD_UP,
                Keycode::Down => BUTTON_DPAD_DOWN,
                _ => return None,
            };
            Some(InputEvent::ButtonDown(code))
        }
        SimulatorEvent::MouseButtonDown { point, .. } => {
            Some(InputEvent::PointerPress { x: point.x, y: point.y })
        }
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
