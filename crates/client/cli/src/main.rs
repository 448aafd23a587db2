//! Console battle entry point.
mod config;
mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use battle_content::{ConfigLoader, RosterLoader, demo_roster};
use battle_core::{BattleConfig, BattleError, Character, SeededRandom, TurnBasedBattle};
use config::CliConfig;
use input::ConsoleInput;
use output::ConsoleOutput;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Logs go to a file only, stdout belongs to the battle
    setup_logging(&config)?;

    let battle_config = load_battle_config(&config)?;
    let input = ConsoleInput::new();
    let base_seed = config.seed.unwrap_or_else(rand::random);

    println!("Welcome to the Console Battle System!");

    for battle_index in 0u64.. {
        let seed = base_seed.wrapping_add(battle_index);
        tracing::info!(seed, battle = battle_index + 1, "starting battle");

        let characters = load_characters(&config, &input)?;
        let mut battle = TurnBasedBattle::new(characters, SeededRandom::new(seed), ConsoleOutput)?
            .with_config(battle_config.clone());

        match battle.start() {
            Ok(outcome) => tracing::info!(%outcome, rounds = battle.round(), "battle finished"),
            Err(BattleError::NoUsableMove { .. }) if input.is_closed() => break,
            Err(e) => return Err(e.into()),
        }

        match input.select_choice("Play again? [y/n]", &["y", "n"]) {
            Some(choice) if choice == "y" => continue,
            _ => break,
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Read the roster file if one is configured, otherwise build the demo roster.
fn load_characters(config: &CliConfig, input: &ConsoleInput) -> Result<Vec<Character>> {
    match &config.roster_path {
        Some(path) => RosterLoader::load(path, input),
        None => Ok(demo_roster(input.clone())?),
    }
}

fn load_battle_config(config: &CliConfig) -> Result<BattleConfig> {
    let mut battle_config = match &config.battle_config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => BattleConfig::default(),
    };
    if let Some(limit) = config.round_limit {
        battle_config.round_limit = Some(limit);
    }
    Ok(battle_config)
}

/// Route `tracing` output to `<log dir>/<session>/battle.log`.
fn setup_logging(config: &CliConfig) -> Result<()> {
    let session_id = config.session_id.clone().unwrap_or_else(timestamp_session_id);
    let session_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(get_log_directory)
        .join(&session_id);
    std::fs::create_dir_all(&session_dir)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&session_dir, "battle.log"));
    // Keep the background writer alive for the whole process
    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    tracing::info!(session = %session_id, dir = %session_dir.display(), "logging initialized");
    Ok(())
}

fn timestamp_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{secs}")
}

/// Per-user cache directory for logs, or the temp dir when none is known.
fn get_log_directory() -> PathBuf {
    let cache_root = if cfg!(target_os = "macos") {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join("Library").join("Caches"))
    } else if cfg!(target_os = "windows") {
        std::env::var_os("LOCALAPPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
    };

    cache_root
        .unwrap_or_else(std::env::temp_dir)
        .join("battle")
        .join("logs")
}
