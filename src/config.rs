//! Simulation configuration and validation
//!
//! A `SimConfig` is fixed for the lifetime of a simulation run; every
//! degenerate-geometry case is rejected here so the tick engine never has
//! to fail.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Rejected configuration, reported once at simulation creation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sprite width {sprite} exceeds canvas width {canvas}")]
    SpriteTooWide { sprite: i32, canvas: i32 },
    #[error("sprite height {sprite} exceeds canvas height {canvas}")]
    SpriteTooTall { sprite: i32, canvas: i32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i32 },
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("sprite count must be at least 1")]
    ZeroSprites,
}

/// Immutable per-run simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Canvas size in pixels
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Sprite bounding box in pixels
    pub sprite_width: i32,
    pub sprite_height: i32,
    /// Color names sprites draw from on every bounce (non-empty)
    pub palette: Vec<String>,
    /// Per-tick displacement magnitudes along each axis
    pub step: IVec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: consts::CANVAS_WIDTH,
            canvas_height: consts::CANVAS_HEIGHT,
            sprite_width: consts::SPRITE_WIDTH,
            sprite_height: consts::SPRITE_HEIGHT,
            palette: consts::PALETTE.iter().map(|c| c.to_string()).collect(),
            step: IVec2::new(consts::STEP_X, consts::STEP_Y),
        }
    }
}

impl SimConfig {
    /// Check for degenerate geometry and an empty palette
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("canvas width", self.canvas_width),
            ("canvas height", self.canvas_height),
            ("sprite width", self.sprite_width),
            ("sprite height", self.sprite_height),
            ("horizontal step", self.step.x),
            ("vertical step", self.step.y),
        ];
        for (name, value) in positives {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.sprite_width > self.canvas_width {
            return Err(ConfigError::SpriteTooWide {
                sprite: self.sprite_width,
                canvas: self.canvas_width,
            });
        }
        if self.sprite_height > self.canvas_height {
            return Err(ConfigError::SpriteTooTall {
                sprite: self.sprite_height,
                canvas: self.canvas_height,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Largest top-left position that keeps the sprite fully on canvas
    #[inline]
    pub fn travel_limit(&self) -> IVec2 {
        IVec2::new(
            self.canvas_width - self.sprite_width,
            self.canvas_height - self.sprite_height,
        )
    }
}
