//! Balloon Pop entry point
//!
//! Native builds run a headless round with a simulated player and print the
//! final snapshot as JSON. The web build is driven from JS through
//! `balloon_pop::platform::web`.
//!
//! Usage: `balloon-pop [seed] [config.json]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::process::ExitCode;

    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use balloon_pop::sim::GameEvent;
    use balloon_pop::{Game, GameConfig};

    /// 60 fps
    const FRAME_MS: u32 = 16;
    /// Chance per frame that the player taps a balloon in reach
    const TAP_CHANCE: f64 = 0.04;

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let mut args = std::env::args().skip(1);
        let seed = match args.next() {
            Some(arg) => match arg.parse::<u64>() {
                Ok(seed) => seed,
                Err(e) => {
                    log::error!("Invalid seed {:?}: {}", arg, e);
                    return ExitCode::FAILURE;
                }
            },
            None => std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default(),
        };
        let config = match args.next() {
            Some(path) => match GameConfig::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("{}", e);
                    return ExitCode::FAILURE;
                }
            },
            None => GameConfig::default(),
        };

        log::info!("Balloon Pop (native) starting with seed: {}", seed);
        let mut game = match Game::new(config, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };
        // Player reflexes get their own stream so they don't shift spawns
        let mut player = Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

        game.start();
        while game.is_running() {
            for event in game.frame(FRAME_MS) {
                match event {
                    GameEvent::Tick { time_remaining } if time_remaining % 10 == 0 => {
                        log::info!("{}s left, score {}", time_remaining, game.snapshot().score);
                    }
                    GameEvent::Missed { id } => log::debug!("Missed balloon {}", id),
                    _ => {}
                }
            }

            // Balloons are only reachable once they clear the bottom edge
            let reachable: Vec<u32> = game
                .session()
                .balloons
                .iter()
                .filter(|b| b.pos.y < game.session().config.screen_height - b.size)
                .map(|b| b.id)
                .collect();
            if !reachable.is_empty() && player.random_bool(TAP_CHANCE) {
                let id = reachable[player.random_range(0..reachable.len())];
                game.tap(id);
            }
        }

        match game.snapshot().to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to encode snapshot: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
