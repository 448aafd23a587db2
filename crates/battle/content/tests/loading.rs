//! Roster and config files read from disk and played.

use std::fs;
use std::path::PathBuf;

use battle_content::{ConfigLoader, RosterLoader, automated_demo_roster};
use battle_core::{
    BattleOutcome, Character, CharacterId, EventLog, ScriptedRandom, TargetSelector,
    TurnBasedBattle, UserInput,
};

/// Answers nothing; these tests never ask a user-controlled character to move.
#[derive(Clone, Debug)]
struct NoInput;

impl TargetSelector for NoInput {
    fn select_target(&self, _candidates: &[&Character]) -> Option<CharacterId> {
        None
    }
}

impl UserInput for NoInput {
    fn select_move(&self, _user: &Character, _others: &[&Character]) -> Option<usize> {
        None
    }
}

const DUEL: &str = r#"
(
    characters: [
        (
            name: "Knight",
            team: "a",
            max_health: 60,
            stats: (attack: 4, defence: 4, speed: 5),
            moves: [
                (
                    name: "Cleave",
                    max_uses: 10,
                    actions: [(target: FirstEnemy, effect: Damage(Absolute(25)))],
                ),
            ],
        ),
        (
            name: "Goblin",
            team: "b",
            max_health: 50,
            stats: (attack: 2, defence: 1, speed: 1),
            moves: [
                (
                    name: "Scratch",
                    max_uses: 10,
                    actions: [(target: FirstEnemy, effect: Damage(Absolute(5)))],
                ),
            ],
        ),
    ],
)
"#;

#[test]
fn loaded_roster_and_config_drive_a_battle() {
    let dir = tempfile::tempdir().expect("temp dir");
    let roster_path = dir.path().join("roster.ron");
    let config_path = dir.path().join("config.toml");
    fs::write(&roster_path, DUEL).expect("write roster");
    fs::write(&config_path, "round_limit = 10\n").expect("write config");

    let characters = RosterLoader::load(&roster_path, &NoInput).expect("roster loads");
    let config = ConfigLoader::load(&config_path).expect("config loads");
    assert_eq!(config.round_limit, Some(10));

    let mut battle = TurnBasedBattle::new(characters, ScriptedRandom::new(), EventLog::new())
        .expect("battle should build")
        .with_config(config);
    let outcome = battle.start().expect("battle should run");

    // Knight is faster: 25 + 25 drops the Goblin on round two
    assert_eq!(outcome, BattleOutcome::Winner("a".into()));
    assert_eq!(battle.round(), 2);
    let knight = battle.roster().get(CharacterId(0)).expect("knight");
    assert_eq!(knight.current_health(), 55);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.ron");

    let err = RosterLoader::load(&path, &NoInput).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to read file"));
    assert!(message.contains("absent.ron"));
}

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../demos")
}

/// The shipped roster file describes the same characters as the built-in demo.
#[test]
fn shipped_roster_matches_the_builtin_demo() {
    let loaded = RosterLoader::load(&demos_dir().join("roster.ron"), &NoInput).expect("roster");
    let built = automated_demo_roster().expect("demo roster");
    assert_eq!(loaded.len(), built.len());

    for (file, code) in loaded.iter().zip(&built) {
        assert_eq!(file.name(), code.name());
        assert_eq!(file.team(), code.team());
        assert_eq!(file.max_health(), code.max_health());
        assert_eq!(file.stats(), code.stats());
        assert_eq!(file.moves(), code.moves(), "{} moves differ", code.name());
        assert_eq!(file.item(), code.item(), "{} item differs", code.name());
        assert_eq!(file.protect_limit(), code.protect_limit(), "{}", code.name());
    }

    let config = ConfigLoader::load(&demos_dir().join("battle.toml")).expect("config");
    assert_eq!(config.round_limit, Some(50));
}
