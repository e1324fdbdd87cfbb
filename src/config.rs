//! Application configuration constants.
//!
//! Layout values like the button X position are computed at compile time as
//! `const`, so the rendering and hit-testing code never recalculates them per
//! frame. The screen size is fixed: the console has exactly one display mode.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels. The console renders at a fixed 720p.
pub const SCREEN_WIDTH: u32 = 1280;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 720;

// =============================================================================
// Button Layout
// =============================================================================

/// Width of each menu button in pixels.
pub const BUTTON_WIDTH: u32 = 500;

/// Height of each menu button in pixels.
pub const BUTTON_HEIGHT: u32 = 80;

/// X position of every button (horizontally centered on screen).
/// Pre-computed to avoid per-frame arithmetic.
pub const BUTTON_X: i32 = ((SCREEN_WIDTH - BUTTON_WIDTH) / 2) as i32;

/// Y positions of the three buttons, top to bottom (Reboot, Power off, Cancel).
pub const BUTTON_YS: [i32; 3] = [200, 320, 440];

// =============================================================================
// Input Configuration
// =============================================================================

/// Analog stick magnitude that counts as a deliberate up/down flick.
/// Axis values are signed 16-bit; 8000 is roughly a quarter deflection.
pub const ANALOG_THRESHOLD: i16 = 8000;

/// Delay between a touch activation and dispatching its action. Activating the
/// power-state service immediately after the touch transition can crash it, so
/// the loop waits this long (still draining events) before dispatching.
pub const TOUCH_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Poll interval for the event queue during the touch settle wait.
pub const SETTLE_POLL_INTERVAL: Duration = Duration::from_millis(10);
