//! Boundary contact checks for the rectangular canvas
//!
//! Positions are the sprite's top-left corner; `limit` is the largest
//! position keeping the sprite fully on canvas, so `pos.x >= limit.x`
//! means the sprite touches (or overshoots) the right wall. Contact checks
//! use `<=`/`>=` rather than equality because a sprite may rest one step
//! past a wall before the reflection corrects it.

use glam::IVec2;

use super::state::Heading;

/// Heading that points back into the canvas interior if the position
/// touches two orthogonal walls at once
///
/// Returns `None` away from corners. The current heading is irrelevant:
/// a corner contact forces the unique escape diagonal.
pub fn corner_escape(pos: IVec2, limit: IVec2) -> Option<Heading> {
    let at_left = pos.x <= 0;
    let at_right = pos.x >= limit.x;
    let at_top = pos.y <= 0;
    let at_bottom = pos.y >= limit.y;

    if at_left && at_top {
        Some(Heading::DownRight)
    } else if at_left && at_bottom {
        Some(Heading::UpRight)
    } else if at_right && at_top {
        Some(Heading::DownLeft)
    } else if at_right && at_bottom {
        Some(Heading::UpLeft)
    } else {
        None
    }
}

/// Reflect a heading off any wall the position touches
///
/// The horizontal walls are checked after (and independently of) the
/// vertical ones; each axis flips only a heading moving further out, so a
/// heading already corrected by `corner_escape` passes through unchanged.
pub fn reflect_walls(pos: IVec2, limit: IVec2, mut heading: Heading) -> Heading {
    if pos.x <= 0 && heading.points_left() {
        heading = heading.reflect_horizontal();
    } else if pos.x >= limit.x && heading.points_right() {
        heading = heading.reflect_horizontal();
    }

    if pos.y <= 0 && heading.points_up() {
        heading = heading.reflect_vertical();
    } else if pos.y >= limit.y && heading.points_down() {
        heading = heading.reflect_vertical();
    }

    heading
}
