//! Logo Bounce demo driver
//!
//! Owns the simulation state and the tick schedule; the core computes one
//! tick per call. Usage:
//!
//! ```text
//! logo-bounce [sprites] [ticks] [seed] [tick_ms]
//! ```

use std::thread;
use std::time::{Duration, Instant};

use logo_bounce::SimConfig;
use logo_bounce::consts::MAX_SPRITES;
use logo_bounce::sim::{SimulationState, advance};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut sprite_count: usize = parse_arg(args.next(), 5);
    let ticks: u64 = parse_arg(args.next(), 600);
    let seed: u64 = parse_arg(args.next(), 0xD1CE);
    let tick_ms: u64 = parse_arg(args.next(), 100);

    if sprite_count == 0 {
        log::warn!("sprite count 0 raised to 1");
        sprite_count = 1;
    } else if sprite_count > MAX_SPRITES {
        log::warn!("sprite count {sprite_count} clamped to {MAX_SPRITES}");
        sprite_count = MAX_SPRITES;
    }

    let config = SimConfig::default();
    let mut state = match SimulationState::new(&config, sprite_count, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "running {ticks} ticks on a {}x{} canvas ({tick_ms}ms per tick)",
        config.canvas_width,
        config.canvas_height
    );

    let interval = Duration::from_millis(tick_ms);
    for _ in 0..ticks {
        let started = Instant::now();

        let events = advance(&mut state, &config);
        for event in &events {
            let sprite = &state.sprites[event.sprite_index];
            if event.corner_bounce {
                log::info!(
                    "sprite {} hit a corner (total {}), now {:?} {}",
                    event.sprite_index,
                    state.corner_bounces,
                    sprite.heading,
                    sprite.color
                );
            } else {
                log::debug!(
                    "sprite {} bounced, now {:?} {}",
                    event.sprite_index,
                    sprite.heading,
                    sprite.color
                );
            }
        }

        if let Some(rest) = interval.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    log::info!(
        "finished: {} ticks, {} corner bounces",
        state.ticks,
        state.corner_bounces
    );
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(&state) {
            log::debug!("final state: {json}");
        }
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T) -> T {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}
