//! Whole-simulation determinism and containment tests
//!
//! Everything here drives the public API only: create a simulation, tick
//! it, and check the invariants an embedding application relies on.

use proptest::prelude::*;

use logo_bounce::SimConfig;
use logo_bounce::sim::{Heading, SimulationState, advance};

#[test]
fn test_round_trip_determinism() {
    let config = SimConfig::default();
    let mut a = SimulationState::new(&config, 10, 2024).unwrap();
    let mut b = SimulationState::new(&config, 10, 2024).unwrap();

    for _ in 0..500 {
        let events_a = advance(&mut a, &config);
        let events_b = advance(&mut b, &config);
        assert_eq!(events_a, events_b);
    }

    assert_eq!(a, b);
    // Serialized snapshots are bit-identical, RNG stream included.
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_different_seeds_diverge() {
    let config = SimConfig::default();
    let a = SimulationState::new(&config, 10, 1).unwrap();
    let b = SimulationState::new(&config, 10, 2).unwrap();
    assert_ne!(a.sprites, b.sprites);
}

#[test]
fn test_reinitialization_resets() {
    let config = SimConfig::default();
    let mut state = SimulationState::new(&config, 4, 7).unwrap();

    // Force some corner traffic by running long enough.
    for _ in 0..5_000 {
        advance(&mut state, &config);
    }
    assert_eq!(state.ticks, 5_000);

    let fresh = SimulationState::new(&config, 9, 7).unwrap();
    assert_eq!(fresh.corner_bounces, 0);
    assert_eq!(fresh.ticks, 0);
    assert_eq!(fresh.sprites.len(), 9);
}

#[test]
fn test_factory_draws_cover_domains() {
    // Smoke check on uniformity: with 400 sprites every palette color and
    // every heading should show up.
    let config = SimConfig::default();
    let state = SimulationState::new(&config, 400, 31337).unwrap();

    for color in &config.palette {
        assert!(
            state.sprites.iter().any(|s| s.color == *color),
            "color {color} never drawn"
        );
    }
    for heading in Heading::ALL {
        assert!(state.sprites.iter().any(|s| s.heading == heading));
    }
}

proptest! {
    /// Overshoot is bounded: positions never drift past one step magnitude
    /// outside the travel range, for any seed and any run length.
    #[test]
    fn prop_positions_stay_bounded(
        seed in any::<u64>(),
        sprite_count in 1usize..8,
        ticks in 1usize..300,
    ) {
        let config = SimConfig::default();
        let limit = config.travel_limit();
        let mut state = SimulationState::new(&config, sprite_count, seed).unwrap();

        for _ in 0..ticks {
            advance(&mut state, &config);
            for sprite in &state.sprites {
                prop_assert!(sprite.pos.x >= -config.step.x);
                prop_assert!(sprite.pos.x <= limit.x + config.step.x);
                prop_assert!(sprite.pos.y >= -config.step.y);
                prop_assert!(sprite.pos.y <= limit.y + config.step.y);
            }
        }
    }

    /// The corner counter never decreases, and grows by exactly the number
    /// of corner events reported each tick.
    #[test]
    fn prop_corner_counter_matches_events(
        seed in any::<u64>(),
        sprite_count in 1usize..8,
        ticks in 1usize..300,
    ) {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config, sprite_count, seed).unwrap();
        let mut previous = state.corner_bounces;

        for _ in 0..ticks {
            let events = advance(&mut state, &config);
            let corner_events = events.iter().filter(|e| e.corner_bounce).count() as u64;
            prop_assert!(state.corner_bounces >= previous);
            prop_assert_eq!(state.corner_bounces, previous + corner_events);
            previous = state.corner_bounces;
        }
    }

    /// Every sprite color stays within the configured palette.
    #[test]
    fn prop_colors_stay_in_palette(seed in any::<u64>(), ticks in 1usize..200) {
        let config = SimConfig::default();
        let mut state = SimulationState::new(&config, 5, seed).unwrap();

        for _ in 0..ticks {
            advance(&mut state, &config);
        }
        for sprite in &state.sprites {
            prop_assert!(config.palette.contains(&sprite.color));
        }
    }

    /// Small canvases keep the invariants too, as long as the sprite fits
    /// and a step still fits inside the travel range.
    #[test]
    fn prop_bounded_on_small_canvas(seed in any::<u64>(), ticks in 1usize..200) {
        let config = SimConfig {
            canvas_width: 80,
            canvas_height: 40,
            sprite_width: 10,
            sprite_height: 6,
            ..Default::default()
        };
        let limit = config.travel_limit();
        let mut state = SimulationState::new(&config, 3, seed).unwrap();

        for _ in 0..ticks {
            advance(&mut state, &config);
            for sprite in &state.sprites {
                prop_assert!(sprite.pos.x >= -config.step.x && sprite.pos.x <= limit.x + config.step.x);
                prop_assert!(sprite.pos.y >= -config.step.y && sprite.pos.y <= limit.y + config.step.y);
            }
        }
    }
}

#[test]
fn test_long_run_stays_live() {
    // A single sprite pinned to the default geometry keeps moving forever:
    // ticks advance, positions change, and the heading stays one of the
    // four diagonals.
    let config = SimConfig::default();
    let mut state = SimulationState::new(&config, 1, 8080).unwrap();

    let mut last_pos = state.sprites[0].pos;
    let mut moved = 0u32;
    for _ in 0..10_000 {
        advance(&mut state, &config);
        if state.sprites[0].pos != last_pos {
            moved += 1;
        }
        last_pos = state.sprites[0].pos;
    }
    // The displacement is unconditional, so every tick moves the sprite.
    assert_eq!(moved, 10_000);
}
