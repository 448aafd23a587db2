//! Console rendering of battle events.

use battle_core::{
    ActionResults, BattleEvent, BattleOutcome, Character, EffectValue, EventSink, MoveUse,
    MoveUseResult, Roster, TargetResult, Team,
};

/// Prints every battle event to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleOutput;

impl EventSink for ConsoleOutput {
    fn handle(&mut self, event: &BattleEvent, roster: &Roster) {
        for line in describe_event(event, roster) {
            println!("{line}");
        }
    }
}

/// Lines printed for one event.
pub fn describe_event(event: &BattleEvent, roster: &Roster) -> Vec<String> {
    match event {
        BattleEvent::TurnStarted { round } => {
            let living: Vec<&Character> = roster.living().collect();
            let mut lines = vec![String::new(), format!("Turn {round}")];
            lines.extend(team_lines(&living));
            lines
        }
        BattleEvent::ItemTriggered {
            holder,
            item_name,
            result,
            ..
        } => {
            let mut lines = vec![format!("{}'s {} activated!", roster.name_of(*holder), item_name)];
            lines.extend(describe_action(result, roster));
            lines
        }
        BattleEvent::MoveUsed(move_use) => describe_move_use(move_use, roster),
        BattleEvent::BattleEnded { outcome } => vec![String::new(), describe_outcome(outcome)],
    }
}

fn describe_move_use(move_use: &MoveUse, roster: &Roster) -> Vec<String> {
    let Some(outcome) = move_use.outcome() else {
        return Vec::new();
    };
    // Nothing to report when every target died before the move resolved
    if move_use.targets_all_dead() {
        return Vec::new();
    }

    let user = roster.name_of(move_use.user());
    let headline = match outcome {
        MoveUseResult::Success => format!("{user} used {}!", move_use.move_name()),
        MoveUseResult::Miss => format!("{user} used {} but missed!", move_use.move_name()),
        MoveUseResult::Failure => format!("{user} used {} but it failed!", move_use.move_name()),
    };

    let mut lines = vec![headline];
    for action in move_use.results() {
        lines.extend(describe_action(action, roster));
    }
    lines
}

fn describe_action(action: &ActionResults, roster: &Roster) -> Vec<String> {
    if !action.success {
        return vec!["But it failed!".to_owned()];
    }
    action
        .results
        .iter()
        .flat_map(|result| describe_result(result, roster))
        .collect()
}

/// Lines describing what happened to one target.
pub fn describe_result(result: &TargetResult, roster: &Roster) -> Vec<String> {
    let target = roster.name_of(result.target);
    if result.protected {
        return vec![format!("{target} protected itself!")];
    }

    match &result.value {
        EffectValue::Damage { amount, .. } => vec![format!("{target} took {amount} damage!")],
        EffectValue::Heal { amount, .. } => vec![format!("{target} recovered {amount} health!")],
        EffectValue::Buff { changes } => changes
            .iter()
            .map(|change| {
                let direction = if change.percent >= 0 { "rose" } else { "fell" };
                format!(
                    "{target}'s {} {direction} by {}%!",
                    change.stat,
                    change.percent.unsigned_abs()
                )
            })
            .collect(),
        EffectValue::Protect { protector } if *protector == result.target => {
            vec![format!("{target} is protecting itself!")]
        }
        EffectValue::Protect { protector } => {
            vec![format!("{} is protecting {target}!", roster.name_of(*protector))]
        }
        EffectValue::ProtectLimitChange { delta, limit } => match delta.signum() {
            1 => vec![format!("{target}'s protect limit rose to {limit}!")],
            -1 => vec![format!("{target}'s protect limit fell to {limit}!")],
            _ => Vec::new(),
        },
        EffectValue::Suppressed => Vec::new(),
    }
}

fn describe_outcome(outcome: &BattleOutcome) -> String {
    match outcome {
        BattleOutcome::Winner(team) => format!("Team {team} wins!"),
        BattleOutcome::NoSurvivors => "Nobody is left standing!".to_owned(),
        BattleOutcome::RoundLimitReached { rounds } => {
            format!("The battle was called off after {rounds} rounds.")
        }
    }
}

/// One block of summaries per team, teams in order of first appearance.
fn team_lines(characters: &[&Character]) -> Vec<String> {
    let mut teams: Vec<&Team> = Vec::new();
    for character in characters {
        if !teams.contains(&character.team()) {
            teams.push(character.team());
        }
    }

    let mut lines = Vec::new();
    for team in teams {
        lines.push(String::new());
        lines.extend(
            characters
                .iter()
                .filter(|c| c.team() == team && c.is_alive())
                .map(|c| c.summary()),
        );
    }
    lines
}

/// Print living characters grouped by team.
pub fn show_teams(characters: &[&Character]) {
    for line in team_lines(characters) {
        println!("{line}");
    }
}

/// Print a character's summary, plus moves and item if it is on `viewer`'s team.
pub fn show_inspection(viewer: &Character, character: &Character) {
    println!();
    println!("{}", character.summary());

    if character.team() == viewer.team() {
        println!();
        println!("Moves:");
        println!("{}", character.moves().summary());

        if let Some(item) = character.item() {
            println!();
            println!("Item:");
            println!("{}", item.summary());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_content::{CharacterBuilder, automated_demo_roster};
    use battle_core::{CharacterId, StatKind, StatModifier};

    fn roster() -> Roster {
        Roster::new(automated_demo_roster().expect("demo roster"))
    }

    fn applied(target: u32, value: EffectValue) -> TargetResult {
        TargetResult {
            target: CharacterId(target),
            protected: false,
            success: true,
            value,
        }
    }

    #[test]
    fn describes_damage_and_healing() {
        let roster = roster();
        let damage = applied(
            2,
            EffectValue::Damage {
                power: 20,
                amount: 20,
                remaining_health: 80,
            },
        );
        assert_eq!(describe_result(&damage, &roster), ["Mage took 20 damage!"]);

        let heal = applied(0, EffectValue::Heal { amount: 20, health: 94 });
        assert_eq!(describe_result(&heal, &roster), ["Warrior recovered 20 health!"]);
    }

    #[test]
    fn describes_protection() {
        let roster = roster();
        let shielded = TargetResult {
            target: CharacterId(2),
            protected: true,
            success: false,
            value: EffectValue::Suppressed,
        };
        assert_eq!(describe_result(&shielded, &roster), ["Mage protected itself!"]);

        let granted = applied(
            2,
            EffectValue::Protect {
                protector: CharacterId(3),
            },
        );
        assert_eq!(describe_result(&granted, &roster), ["Rogue is protecting Mage!"]);
    }

    #[test]
    fn describes_each_stat_change() {
        let roster = roster();
        let buff = applied(
            0,
            EffectValue::Buff {
                changes: vec![
                    StatModifier::raise(StatKind::Attack, 5),
                    StatModifier::lower(StatKind::Speed, 10),
                ],
            },
        );
        assert_eq!(
            describe_result(&buff, &roster),
            ["Warrior's attack rose by 5%!", "Warrior's speed fell by 10%!"]
        );
    }

    #[test]
    fn unchanged_protect_limit_prints_nothing() {
        let roster = roster();
        let unchanged = applied(0, EffectValue::ProtectLimitChange { delta: 0, limit: 0 });
        assert!(describe_result(&unchanged, &roster).is_empty());
    }

    #[test]
    fn outcome_lines() {
        assert_eq!(
            describe_outcome(&BattleOutcome::Winner(Team::new("a"))),
            "Team a wins!"
        );
        assert_eq!(
            describe_outcome(&BattleOutcome::RoundLimitReached { rounds: 30 }),
            "The battle was called off after 30 rounds."
        );
    }

    #[test]
    fn team_blocks_follow_first_appearance() {
        let alive = CharacterBuilder::default()
            .name("Alive")
            .team("a")
            .max_health(10)
            .build()
            .expect("alive");
        let other = CharacterBuilder::default()
            .name("Other")
            .team("b")
            .max_health(10)
            .build()
            .expect("other");

        assert_eq!(
            team_lines(&[&alive, &other]),
            ["", "Alive: 10/10 HP", "", "Other: 10/10 HP"]
        );
    }
}
