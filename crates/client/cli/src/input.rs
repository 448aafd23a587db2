//! Console input for move menus, target prompts and yes/no questions.
//!
//! Every prompt re-asks until it gets a valid answer. End of input is
//! sticky: once stdin closes every prompt returns `None`, which the battle
//! surfaces as a character without a usable move.

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::iter;
use std::rc::Rc;

use battle_core::{Character, CharacterId, TargetSelector, UserInput};

use crate::output;

/// A line typed at the move menu.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// Summaries of every living character, grouped by team.
    View,
    /// Details of one character, 0-based into `[user, others...]`.
    Inspect(usize),
    /// 0-based move index.
    Move(usize),
    Invalid,
}

impl MenuCommand {
    /// Parse a menu line. Numbers are 1-based as shown on screen.
    pub fn parse(line: &str, move_count: usize, character_count: usize) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("view") {
            return Self::View;
        }
        if let Some(rest) = line.strip_prefix("inspect ") {
            return match one_based(rest, character_count) {
                Some(index) => Self::Inspect(index),
                None => Self::Invalid,
            };
        }
        match one_based(line, move_count) {
            Some(index) => Self::Move(index),
            None => Self::Invalid,
        }
    }
}

fn one_based(text: &str, count: usize) -> Option<usize> {
    let n = text.trim().parse::<usize>().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

fn choice_list(count: usize) -> String {
    (1..=count)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads decisions from stdin. Clones share the end-of-input flag.
#[derive(Clone, Debug, Default)]
pub struct ConsoleInput {
    closed: Rc<Cell<bool>>,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once stdin has been exhausted.
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    fn read_line(&self) -> Option<String> {
        if self.closed.get() {
            return None;
        }
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                tracing::info!("stdin closed");
                self.closed.set(true);
                None
            }
            Ok(_) => Some(line.trim().to_owned()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stdin");
                self.closed.set(true);
                None
            }
        }
    }

    /// Ask until one of `choices` is typed, ignoring case.
    pub fn select_choice(&self, prompt: &str, choices: &[&str]) -> Option<String> {
        println!("{prompt}");
        loop {
            let line = self.read_line()?;
            if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&line)) {
                return Some((*choice).to_owned());
            }
            println!("Please enter a valid choice!");
        }
    }
}

impl TargetSelector for ConsoleInput {
    fn select_target(&self, candidates: &[&Character]) -> Option<CharacterId> {
        println!("Select a target for the move:");
        for (i, candidate) in candidates.iter().enumerate() {
            println!("{}: {}", i + 1, candidate.name());
        }

        loop {
            let line = self.read_line()?;
            match one_based(&line, candidates.len()) {
                Some(index) => return Some(candidates[index].id()),
                None => println!(
                    "Invalid choice! Please enter one of: {}",
                    choice_list(candidates.len())
                ),
            }
        }
    }
}

impl UserInput for ConsoleInput {
    fn select_move(&self, user: &Character, others: &[&Character]) -> Option<usize> {
        let everyone: Vec<&Character> = iter::once(user).chain(others.iter().copied()).collect();
        let move_count = user.moves().len();

        loop {
            println!();
            println!("What will {} do?", user.name());
            println!("{}", user.moves().summary());
            println!();

            let line = self.read_line()?;
            match MenuCommand::parse(&line, move_count, everyone.len()) {
                MenuCommand::View => output::show_teams(&everyone),
                MenuCommand::Inspect(index) => output::show_inspection(user, everyone[index]),
                MenuCommand::Move(index) if user.can_use_move(index) => return Some(index),
                MenuCommand::Move(index) => {
                    let Some(mv) = user.moves().get(index) else {
                        continue;
                    };
                    if mv.can_use() {
                        println!("{} can't protect any more! Choose another move", user.name());
                    } else {
                        println!("{} has no uses left! Choose another move", mv.name);
                    }
                }
                MenuCommand::Invalid => println!(
                    "Invalid choice! Please enter one of: {}",
                    choice_list(move_count)
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_commands() {
        assert_eq!(MenuCommand::parse("view", 4, 4), MenuCommand::View);
        assert_eq!(MenuCommand::parse(" VIEW ", 4, 4), MenuCommand::View);
        assert_eq!(MenuCommand::parse("inspect 2", 4, 4), MenuCommand::Inspect(1));
        assert_eq!(MenuCommand::parse("1", 4, 4), MenuCommand::Move(0));
        assert_eq!(MenuCommand::parse("4", 4, 2), MenuCommand::Move(3));
    }

    #[test]
    fn out_of_range_numbers_are_invalid() {
        assert_eq!(MenuCommand::parse("0", 4, 4), MenuCommand::Invalid);
        assert_eq!(MenuCommand::parse("5", 4, 4), MenuCommand::Invalid);
        assert_eq!(MenuCommand::parse("inspect 5", 4, 4), MenuCommand::Invalid);
        assert_eq!(MenuCommand::parse("strike", 4, 4), MenuCommand::Invalid);
    }

    #[test]
    fn choice_list_is_one_based() {
        assert_eq!(choice_list(3), "1, 2, 3");
    }
}
