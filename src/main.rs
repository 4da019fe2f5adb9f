//! Space Dash entry point
//!
//! Runs the autopilot against the simulation with no window and prints a JSON
//! summary when the session ends.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use space_dash::platform::{Autopilot, FixedStep, Session};
use space_dash::renderer::HeadlessRenderer;
use space_dash::sim::GameState;
use space_dash::GameConfig;

/// Seconds of game time between progress log lines
const REPORT_SECONDS: u64 = 10;

struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    ticks: u64,
    restarts: u32,
    realtime: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            ticks: 3_600,
            restarts: 2,
            realtime: false,
        }
    }
}

fn print_help() {
    println!("Space Dash - headless autopilot runner\n");
    println!("Usage: space-dash [options]\n");
    println!("Options:");
    println!("  --config PATH   Load tuning from a JSON file");
    println!("  --seed N        RNG seed (default: current time)");
    println!("  --ticks N       Maximum steps to run (default: 3600)");
    println!("  --restarts N    Restarts allowed after game over (default: 2)");
    println!("  --realtime      Pace steps to the configured tick rate");
    println!("  --help          Show this help message");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'space-dash --help' for usage.");
    std::process::exit(1);
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> T {
    let Some(value) = value else {
        usage_error(&format!("Missing value for {}", flag));
    };
    match value.parse() {
        Ok(n) => n,
        Err(_) => usage_error(&format!("Invalid value for {}: {}", flag, value)),
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => usage_error("Missing value for --config"),
            },
            "--seed" => args.seed = Some(parse_number("--seed", iter.next())),
            "--ticks" => args.ticks = parse_number("--ticks", iter.next()),
            "--restarts" => args.restarts = parse_number("--restarts", iter.next()),
            "--realtime" => args.realtime = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => usage_error(&format!("Unknown option: {}", other)),
        }
    }

    args
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = parse_args();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    let tick_rate = config.tick_rate;

    log::info!("Space Dash starting (seed {}, up to {} steps)", seed, args.ticks);

    let state = GameState::new(config, seed)?;
    let mut session = Session::new(state, Autopilot::new(args.restarts));
    let mut renderer = HeadlessRenderer::new();
    let report_every = u64::from(tick_rate) * REPORT_SECONDS;

    if args.realtime {
        let mut clock = FixedStep::new(tick_rate);
        let frame = Duration::from_secs_f32(clock.dt());
        let mut last = Instant::now();
        let mut taken = 0;

        while taken < args.ticks && !session.has_quit() {
            let now = Instant::now();
            let due = u64::from(clock.advance((now - last).as_secs_f32()));
            last = now;

            taken += session.catch_up(due.min(args.ticks - taken), &mut renderer, |s| {
                if s.summary().steps % report_every == 0 {
                    report(s);
                }
            });
            std::thread::sleep(frame);
        }
    } else {
        while session.summary().steps < args.ticks && !session.has_quit() {
            let remaining = args.ticks - session.summary().steps;
            session.run(report_every.min(remaining), &mut renderer);
            report(&session);
        }
    }

    let summary = session.summary();
    log::info!(
        "Finished: {} steps, {} games, best score {}, {} frames drawn",
        summary.steps,
        summary.games_played,
        summary.best_score,
        renderer.frames
    );
    println!("{}", summary.to_json()?);

    Ok(())
}

fn report(session: &Session<Autopilot>) {
    let state = session.state();
    log::info!(
        "t={} score={} lives={} fuel={:.1} obstacles={} phase={:?}",
        state.time_ticks,
        state.score,
        state.lives,
        state.rocket.fuel,
        state.obstacles.len(),
        state.phase
    );
}
