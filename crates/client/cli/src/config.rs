//! Console runtime configuration.
use std::env;
use std::path::PathBuf;

/// Configuration for one console session.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Seed of the first battle; later battles in the session add their index.
    pub seed: Option<u64>,
    pub roster_path: Option<PathBuf>,
    pub battle_config_path: Option<PathBuf>,
    pub round_limit: Option<u32>,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SEED` - Seed for the randomness source (default: random)
    /// - `BATTLE_ROSTER` - RON roster file (default: built-in demo roster)
    /// - `BATTLE_CONFIG` - TOML battle configuration (default: no round limit)
    /// - `BATTLE_ROUND_LIMIT` - Round limit, overriding `BATTLE_CONFIG`
    /// - `BATTLE_LOG_DIR` - Directory for session logs (default: platform cache dir)
    /// - `BATTLE_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("BATTLE_SEED"),
            roster_path: env::var("BATTLE_ROSTER").ok().map(PathBuf::from),
            battle_config_path: env::var("BATTLE_CONFIG").ok().map(PathBuf::from),
            round_limit: read_env::<u32>("BATTLE_ROUND_LIMIT").map(|limit| limit.max(1)),
            log_dir: env::var("BATTLE_LOG_DIR").ok().map(PathBuf::from),
            session_id: env::var("BATTLE_SESSION_ID").ok(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
