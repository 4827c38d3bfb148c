//! Gap Runner entry point
//!
//! Native builds run a headless session flown by the demo pilot and print the
//! final snapshot as JSON. The web build starts from `gap_runner::web`.
//!
//! Usage: `gap-runner [seconds] [seed] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gap_runner::Settings;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Gap Runner (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seconds: f32 = args.first().and_then(|s| s.parse().ok()).unwrap_or(30.0);
    let seed: u64 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);

    let settings = match args.get(2) {
        Some(path) => match Settings::load_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    if let Err(e) = headless::run(settings, seconds, seed) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is gap_runner::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use gap_runner::platform::Host;
    use gap_runner::sim::GameEvent;
    use gap_runner::{ConfigError, Settings};

    /// Longest session a headless run will simulate
    pub const MAX_SECONDS: f32 = 3600.0;

    /// Frames needed to cover `seconds`, clamped to `0..=MAX_SECONDS`
    pub fn frame_count(seconds: f32, frame_secs: f32) -> u64 {
        let seconds = if seconds.is_nan() { 0.0 } else { seconds.clamp(0.0, MAX_SECONDS) };
        (seconds / frame_secs).ceil() as u64
    }

    /// Fly the demo pilot for `seconds` of simulated time or until the run ends
    pub fn run(settings: Settings, seconds: f32, seed: u64) -> Result<(), ConfigError> {
        let frame_secs = settings.timing.tick_dt();
        let frames = frame_count(seconds, frame_secs);
        let mut host = Host::new(settings, seed)?;
        host.autopilot = true;
        log::info!("Running {}s headless with seed {}", seconds, seed);

        for _ in 0..frames {
            host.frame(frame_secs);
            for event in host.game.drain_events() {
                match event {
                    GameEvent::Scored { score } if score.fract() == 0.0 => {
                        log::info!("Score {}", score)
                    }
                    _ => log::debug!("{:?}", event),
                }
            }
            if host.game.is_ended() {
                break;
            }
        }

        let snapshot = host.game.snapshot();
        log::info!("{}", snapshot.hud_text());
        if let Some(banner) = snapshot.banner() {
            log::info!("{}", banner);
        }
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Snapshot serialization failed: {}", e),
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_frame_count_covers_requested_seconds() {
            assert_eq!(frame_count(1.0, 0.5), 2);
            assert_eq!(frame_count(1.2, 0.5), 3);
            assert_eq!(frame_count(0.0, 0.5), 0);
        }

        #[test]
        fn test_frame_count_clamps_out_of_range_seconds() {
            let cap = frame_count(MAX_SECONDS, 0.5);
            assert_eq!(cap, 7200);
            assert_eq!(frame_count(f32::INFINITY, 0.5), cap);
            assert_eq!(frame_count(1.0e30, 0.5), cap);
            assert_eq!(frame_count(f32::NAN, 0.5), 0);
            assert_eq!(frame_count(-5.0, 0.5), 0);
            assert_eq!(frame_count(f32::NEG_INFINITY, 0.5), 0);
        }
    }
}
