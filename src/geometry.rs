//! Touch/pointer hit-testing.
//!
//! `Rectangle::contains` in embedded-graphics excludes the bottom-right edge
//! (it treats the rectangle as a half-open pixel region). Hit-testing here is
//! inclusive on all four edges, matching how the console reports touches on
//! button borders, so the test is written out explicitly.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Returns true iff `point` lies within `rect`, including all four edges.
pub const fn point_in_rect(point: Point, rect: &Rectangle) -> bool {
    let right = rect.top_left.x + rect.size.width as i32;
    let bottom = rect.top_left.y + rect.size.height as i32;
    point.x >= rect.top_left.x && point.x <= right && point.y >= rect.top_left.y && point.y <= bottom
}
