//! Per-frame menu drawing.
//!
//! Each frame clears the screen and draws the three buttons: a filled
//! rectangle (highlight color when selected) with the label centered inside.
//! A draw failure for one item is logged and that item is skipped for the
//! frame; it never aborts the frame or the loop.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::Text;

use crate::colors::{BACKGROUND, ITEM, SELECTED};
use crate::menu::MenuModel;
use crate::styles::{CENTERED, LABEL_STYLE};

/// Draw the whole menu onto `display`.
///
/// Text layout is handled by the centered style: the label is positioned at
/// the button's center point with middle alignment in both axes.
pub fn draw_menu<D>(
    display: &mut D,
    menu: &MenuModel,
) where
    D: DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    if let Err(err) = display.clear(BACKGROUND) {
        tracing::warn!("clearing display failed: {err:?}");
        return;
    }

    for item in menu.items() {
        let fill = if item.selected { SELECTED } else { ITEM };
        if let Err(err) = item
            .bounds
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)
        {
            tracing::warn!(label = item.label, "drawing button failed: {err:?}");
            continue;
        }

        // Label failures skip only the label, the button stays visible
        if let Err(err) =
            Text::with_text_style(item.label, item.bounds.center(), LABEL_STYLE, CENTERED)
                .draw(display)
        {
            tracing::warn!(label = item.label, "drawing label failed: {err:?}");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
