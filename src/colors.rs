//! Color constants for the power menu.
//!
//! The display takes 24-bit color, so everything is `Rgb888`. The palette is
//! deliberately small: a dark background, a darker gray for idle buttons, a
//! light blue highlight for the selected button, and white label text.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Dark background behind the menu.
pub const BACKGROUND: Rgb888 = Rgb888::new(30, 30, 30);

/// Fill color for unselected menu buttons.
pub const ITEM: Rgb888 = Rgb888::new(60, 60, 60);

/// Fill color for the selected menu button (light blue).
pub const SELECTED: Rgb888 = Rgb888::new(100, 150, 255);

/// Label text color.
pub const TEXT: Rgb888 = Rgb888::WHITE;
