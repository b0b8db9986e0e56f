//! Simulation state and core types
//!
//! Everything needed to reproduce a run bit-for-bit lives here, including
//! the RNG mid-stream state.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SimConfig};

/// One of the four diagonal movement directions
///
/// Screen coordinates: +y points down, so `Up*` headings displace by
/// a negative y step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Heading {
    /// All headings, in the order the sprite factory draws from
    pub const ALL: [Heading; 4] = [
        Heading::UpRight,
        Heading::UpLeft,
        Heading::DownRight,
        Heading::DownLeft,
    ];

    /// Per-tick displacement for this heading given the step magnitudes
    #[inline]
    pub fn displacement(self, step: IVec2) -> IVec2 {
        match self {
            Heading::UpRight => IVec2::new(step.x, -step.y),
            Heading::UpLeft => IVec2::new(-step.x, -step.y),
            Heading::DownRight => IVec2::new(step.x, step.y),
            Heading::DownLeft => IVec2::new(-step.x, step.y),
        }
    }

    #[inline]
    pub fn points_left(self) -> bool {
        matches!(self, Heading::UpLeft | Heading::DownLeft)
    }

    #[inline]
    pub fn points_right(self) -> bool {
        matches!(self, Heading::UpRight | Heading::DownRight)
    }

    #[inline]
    pub fn points_up(self) -> bool {
        matches!(self, Heading::UpLeft | Heading::UpRight)
    }

    #[inline]
    pub fn points_down(self) -> bool {
        matches!(self, Heading::DownLeft | Heading::DownRight)
    }

    /// Mirror the horizontal sense, preserving the vertical one
    #[inline]
    pub fn reflect_horizontal(self) -> Heading {
        match self {
            Heading::UpRight => Heading::UpLeft,
            Heading::UpLeft => Heading::UpRight,
            Heading::DownRight => Heading::DownLeft,
            Heading::DownLeft => Heading::DownRight,
        }
    }

    /// Mirror the vertical sense, preserving the horizontal one
    #[inline]
    pub fn reflect_vertical(self) -> Heading {
        match self {
            Heading::UpRight => Heading::DownRight,
            Heading::DownRight => Heading::UpRight,
            Heading::UpLeft => Heading::DownLeft,
            Heading::DownLeft => Heading::UpLeft,
        }
    }
}

/// A logo sprite: top-left position, heading, current color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub pos: IVec2,
    pub heading: Heading,
    pub color: String,
}

impl Sprite {
    /// Spawn a sprite at a uniformly random on-canvas position with a
    /// uniformly random color and heading
    ///
    /// Draw order is fixed (x, y, color, heading) so a seeded generator
    /// reproduces the same sprite.
    pub fn spawn(config: &SimConfig, rng: &mut Pcg32) -> Self {
        let limit = config.travel_limit();
        let pos = IVec2::new(
            rng.random_range(0..=limit.x),
            rng.random_range(0..=limit.y),
        );
        let color = draw_color(&config.palette, rng);
        let heading = Heading::ALL[rng.random_range(0..Heading::ALL.len())];
        Self {
            pos,
            heading,
            color,
        }
    }
}

/// Uniform draw from the palette; may return the color already in use
pub(crate) fn draw_color(palette: &[String], rng: &mut Pcg32) -> String {
    palette[rng.random_range(0..palette.len())].clone()
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG carried across ticks; serialized so snapshots resume mid-stream
    pub(crate) rng: Pcg32,
    /// Sprites in creation order (also rendering order)
    pub sprites: Vec<Sprite>,
    /// Total corner-exact reflections across all sprites
    pub corner_bounces: u64,
    /// Ticks advanced since creation
    pub ticks: u64,
}

impl SimulationState {
    /// Create a fresh simulation with `sprite_count` randomly placed sprites
    ///
    /// The only fallible entry point: configuration is validated here and
    /// never again during ticking.
    pub fn new(config: &SimConfig, sprite_count: usize, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if sprite_count == 0 {
            return Err(ConfigError::ZeroSprites);
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let sprites = (0..sprite_count)
            .map(|_| Sprite::spawn(config, &mut rng))
            .collect();

        log::info!("created simulation: {sprite_count} sprites, seed {seed}");

        Ok(Self {
            seed,
            rng,
            sprites,
            corner_bounces: 0,
            ticks: 0,
        })
    }
}
