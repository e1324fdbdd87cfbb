// Crate-level lints: intentional float/pixel casts in touch coordinate scaling
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

//! On-device power menu for a handheld game console.
//!
//! Shows three buttons (Reboot, Power off, Cancel) on the console's fixed
//! 1280x720 screen and dispatches the chosen system action. The whole program
//! is one single-threaded loop: drain input, update the selection, draw,
//! present.
//!
//! Selection moves with the d-pad or an analog stick (one step per threshold
//! crossing), the A button activates, B exits directly, and a touch on a
//! button both selects and activates it after a short settle delay. On the
//! desktop, keyboard and mouse stand in for the console's controls (see
//! [`window`]).
//!
//! Startup failures exit with status 1; a normal exit (Cancel, B, or a quit
//! signal) returns 0. Reboot and power-off hand the process over to the OS
//! and do not return.

mod actions;
mod colors;
mod config;
mod geometry;
mod input;
mod menu;
mod render;
mod state;
mod styles;
mod window;

use std::thread;
use std::time::Instant;

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::actions::SystemPower;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, SETTLE_POLL_INTERVAL, TOUCH_SETTLE_DELAY};
use crate::input::InputEvent;
use crate::state::AppState;
use crate::window::MenuWindow;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing log subscriber: {err}"))?;
    tracing::info!("application started");

    let mut display: SimulatorDisplay<Rgb888> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut window = MenuWindow::new("Power Menu");
    tracing::info!("display and window initialized");

    let mut state = AppState::new();
    let mut power = SystemPower;
    tracing::info!(selected = state.menu.selected_index(), "menu ready");

    // The window needs one presented frame before its event pump is usable
    render::draw_menu(&mut display, &state.menu);
    window.present(&display);

    while state.running {
        let activation = input::drain(&mut state, window.drain_events());

        if let Some(activation) = activation {
            if activation.touch_settle {
                wait_touch_settle(&mut window, &mut state);
            }
            actions::dispatch(activation.action, &mut state, &mut power);
            // Nothing may render after a dispatched action; the OS may
            // already be tearing the process down
            break;
        }

        render::draw_menu(&mut display, &state.menu);
        window.present(&display);
    }

    tracing::info!("application ended");
    Ok(())
}

/// Bounded wait between a touch activation and its dispatch.
///
/// The power-state service crashes when hit immediately after the touch
/// transition, so the loop idles here briefly. The event queue keeps being
/// drained so a quit signal arriving mid-wait is not lost; no rendering
/// happens during the wait.
fn wait_touch_settle(
    window: &mut MenuWindow,
    state: &mut AppState,
) {
    let deadline = Instant::now() + TOUCH_SETTLE_DELAY;
    while Instant::now() < deadline {
        for event in window.drain_events() {
            if event == InputEvent::Quit {
                tracing::info!("quit received during touch settle");
                state.running = false;
            }
        }
        thread::sleep(SETTLE_POLL_INTERVAL);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
