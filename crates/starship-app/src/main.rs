use std::process::ExitCode;
use std::time::Instant;

use starship_app::config;
use starship_app::game_loop::TICK_DURATION;
use starship_app::pilot::ScriptedPilot;
use starship_app::session;
use starship_app::state::AppState;
use starship_sim::SimulationEngine;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let sim_config = match config::sim_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            return ExitCode::FAILURE;
        }
    };
    let screen_size = sim_config.screen_size;

    let engine = match SimulationEngine::new(sim_config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "invalid config");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new();
    if let Err(e) = session::start_simulation(&state, engine) {
        tracing::error!(error = %e, "failed to start simulation");
        return ExitCode::FAILURE;
    }

    // Feed the scripted pilot at the tick rate until the run time is up
    let run_for = config::run_duration();
    tracing::info!(run_secs = run_for.as_secs_f64(), "running headless");
    let mut pilot = ScriptedPilot::new(screen_size);
    let started = Instant::now();
    while started.elapsed() < run_for {
        if let Err(e) = session::send_input(pilot.next_input(), &state) {
            tracing::error!(error = %e, "game loop went away");
            break;
        }
        std::thread::sleep(TICK_DURATION);
    }

    let time = match session::stop_simulation(&state) {
        Ok(time) => time,
        Err(e) => {
            tracing::error!(error = %e, "failed to stop simulation");
            return ExitCode::FAILURE;
        }
    };

    match session::get_snapshot(&state) {
        Ok(Some(snapshot)) => {
            let engaged = snapshot.enemies.iter().filter(|e| e.engaged).count();
            tracing::info!(
                ticks = time.tick,
                elapsed_secs = time.elapsed_secs,
                player_x = snapshot.player.position.x,
                player_y = snapshot.player.position.y,
                enemies = snapshot.enemies.len(),
                engaged,
                plasmas = snapshot.plasmas.len(),
                "run complete"
            );
        }
        Ok(None) => tracing::warn!("run ended before the first tick"),
        Err(e) => tracing::warn!(error = %e, "could not read final snapshot"),
    }

    ExitCode::SUCCESS
}
