//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - One fixed displacement per tick
//! - Seeded RNG only
//! - Stable sprite order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{corner_escape, reflect_walls};
pub use state::{Heading, SimulationState, Sprite};
pub use tick::{SpriteEvent, advance};
