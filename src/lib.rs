//! Logo Bounce - a bouncing-logo simulation core
//!
//! Core modules:
//! - `config`: canvas/sprite geometry, palette, validation
//! - `sim`: deterministic simulation (headings, reflections, tick engine)
//!
//! The crate computes exactly one tick per `advance` call. Rendering the
//! sprites, scheduling animation frames, and user-facing controls belong to
//! the embedding application.

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{Heading, SimulationState, Sprite, SpriteEvent, advance};

/// Default configuration constants
pub mod consts {
    /// Canvas size in pixels
    pub const CANVAS_WIDTH: i32 = 600;
    pub const CANVAS_HEIGHT: i32 = 400;

    /// Sprite bounding box in pixels
    pub const SPRITE_WIDTH: i32 = 60;
    pub const SPRITE_HEIGHT: i32 = 30;

    /// Per-tick displacement magnitudes
    pub const STEP_X: i32 = 4;
    pub const STEP_Y: i32 = 2;

    /// Default draw palette
    pub const PALETTE: [&str; 7] = [
        "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];

    /// Largest sprite count the demo driver accepts
    pub const MAX_SPRITES: usize = 100;
}
