use std::{env, path::PathBuf, time::Duration};

use starship_core::config::SimConfig;
use starship_core::error::ConfigResult;

// Process-level settings read from the environment (not gameplay tuning).

/// Optional TOML file with `SimConfig` overrides.
pub fn config_path() -> Option<PathBuf> {
    env::var_os("STARSHIP_CONFIG").map(PathBuf::from)
}

/// Seed override. Unparseable values are ignored.
pub fn seed_override() -> Option<u64> {
    env::var("STARSHIP_SEED")
        .ok()
        .and_then(|value| value.trim().parse().ok())
}

/// How long the headless run lasts.
pub fn run_duration() -> Duration {
    let secs = env::var("STARSHIP_RUN_SECS")
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .unwrap_or(DEFAULT_RUN_SECS);
    Duration::from_secs_f64(secs)
}

pub const DEFAULT_RUN_SECS: f64 = 10.0;

/// Build the simulation config: file (if any), then the seed.
///
/// Precedence for the seed is `STARSHIP_SEED`, then the config file, then a
/// fresh random seed when neither is given.
pub fn sim_config() -> ConfigResult<SimConfig> {
    let (mut config, file_seed) = match config_path() {
        Some(path) => {
            let config = SimConfig::load(&path)?;
            let seed = config.seed;
            (config, Some(seed))
        }
        None => (SimConfig::default(), None),
    };
    config.seed = resolve_seed(seed_override(), file_seed, rand::random);
    Ok(config)
}

fn resolve_seed(
    env_seed: Option<u64>,
    file_seed: Option<u64>,
    fresh: impl FnOnce() -> u64,
) -> u64 {
    env_seed.or(file_seed).unwrap_or_else(fresh)
}
