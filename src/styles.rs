//! Pre-computed text styles.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so the label style and alignment are computed at
//! compile time instead of being rebuilt every frame.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::TEXT;

/// Centered in both axes. Positioning a label at a button's center point with
/// this style centers it within the button without manual measurement.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// White label text for the menu buttons (`ProFont` 24pt).
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_24_POINT, TEXT);
