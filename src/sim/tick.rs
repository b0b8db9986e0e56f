//! Per-frame simulation advance
//!
//! One `advance` call moves every sprite by one fixed displacement,
//! resolving wall and corner contacts first. The caller owns the frame
//! cadence; nothing here loops or sleeps.

use serde::{Deserialize, Serialize};

use super::collision::{corner_escape, reflect_walls};
use super::state::{SimulationState, draw_color};
use crate::config::SimConfig;

/// What happened to one sprite during a tick
///
/// Emitted only when at least one flag is set; quiet sprites produce no
/// entry. For testing and telemetry - rendering only needs the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteEvent {
    pub sprite_index: usize,
    /// Pre-move position touched two orthogonal walls
    pub corner_bounce: bool,
    /// Heading changed this tick, so the color was redrawn
    pub color_changed: bool,
}

/// Advance every sprite by one tick
///
/// Per sprite, in order:
/// 1. Corner check on the pre-move position: two orthogonal wall contacts
///    force the escape diagonal, whatever the current heading, and bump the
///    corner-bounce counter.
/// 2. Wall check, x axis then y axis, on the possibly just-forced heading.
/// 3. If the heading differs from tick entry, redraw the color.
/// 4. Apply the heading's displacement - unconditionally, so a sprite at a
///    wall may rest one step outside the canvas until the next tick's
///    checks turn it around.
pub fn advance(state: &mut SimulationState, config: &SimConfig) -> Vec<SpriteEvent> {
    let limit = config.travel_limit();
    let mut events = Vec::new();

    state.ticks += 1;

    for (sprite_index, sprite) in state.sprites.iter_mut().enumerate() {
        let entry_heading = sprite.heading;
        let mut corner_bounce = false;

        if let Some(escape) = corner_escape(sprite.pos, limit) {
            sprite.heading = escape;
            state.corner_bounces += 1;
            corner_bounce = true;
        }

        sprite.heading = reflect_walls(sprite.pos, limit, sprite.heading);

        let color_changed = sprite.heading != entry_heading;
        if color_changed {
            sprite.color = draw_color(&config.palette, &mut state.rng);
        }

        if corner_bounce || color_changed {
            events.push(SpriteEvent {
                sprite_index,
                corner_bounce,
                color_changed,
            });
        }

        sprite.pos += sprite.heading.displacement(config.step);
    }

    events
}
