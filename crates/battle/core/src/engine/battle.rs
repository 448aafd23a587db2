//! Round scheduler.
//!
//! ## Round Flow
//!
//! 1. Advance the round counter and emit `TurnStarted`
//! 2. Ask every living character for its move
//! 3. Order moves: priority desc, effective speed desc, random tie-break
//! 4. Run start-of-turn item actions in that order
//! 5. Process each move whose user is still alive
//! 6. Run end-of-turn item actions in that order
//!
//! Elimination is checked after every item action and every move, so the
//! battle ends on the step that decided it and the rest of the round is
//! skipped.

use std::fmt;

use crate::character::{Character, ItemTrigger};
use crate::config::BattleConfig;
use crate::events::{BattleEvent, EventSink};
use crate::history::ActionHistory;
use crate::rng::BattleRandom;
use crate::roster::{CharacterId, Roster, Team};
use crate::stats::StatKind;

use super::errors::BattleError;
use super::move_use::MoveUse;
use super::processor::{BattleState, MoveProcessor};

/// How a battle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Exactly one team has living members.
    Winner(Team),
    /// The last members of every team fell on the same step.
    NoSurvivors,
    /// `BattleConfig::round_limit` was hit first.
    RoundLimitReached { rounds: u32 },
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<&Team> {
        match self {
            Self::Winner(team) => Some(team),
            _ => None,
        }
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(team) => write!(f, "team {team} wins"),
            Self::NoSurvivors => f.write_str("no survivors"),
            Self::RoundLimitReached { rounds } => write!(f, "round limit of {rounds} reached"),
        }
    }
}

/// Runs rounds until one team is left standing.
pub struct TurnBasedBattle<S> {
    state: BattleState,
    processor: MoveProcessor,
    sink: S,
    outcome: Option<BattleOutcome>,
}

impl<S: EventSink> TurnBasedBattle<S> {
    pub fn new<R>(characters: Vec<Character>, rng: R, sink: S) -> Result<Self, BattleError>
    where
        R: BattleRandom + 'static,
    {
        if characters.is_empty() {
            return Err(BattleError::EmptyRoster);
        }

        Ok(Self {
            state: BattleState::new(Roster::new(characters), Box::new(rng)),
            processor: MoveProcessor::new(),
            sink,
            outcome: None,
        })
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.state.config = config;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.state.roster
    }

    pub fn history(&self) -> &ActionHistory {
        &self.state.history
    }

    /// Rounds started so far.
    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run the battle to completion.
    ///
    /// Calling again after the battle ended returns the same outcome.
    pub fn start(&mut self) -> Result<BattleOutcome, BattleError> {
        if let Some(outcome) = &self.outcome {
            return Ok(outcome.clone());
        }

        let outcome = loop {
            if let Some(outcome) = self.check_elimination() {
                break outcome;
            }
            if self.state.config.round_limit_reached(self.state.round) {
                break BattleOutcome::RoundLimitReached {
                    rounds: self.state.round,
                };
            }
            if let Some(outcome) = self.play_round()? {
                break outcome;
            }
        };

        Ok(self.finish(outcome))
    }

    fn play_round(&mut self) -> Result<Option<BattleOutcome>, BattleError> {
        // 1. New round
        self.state.round += 1;
        let round = self.state.round;
        self.emit(BattleEvent::TurnStarted { round });

        // 2-3. Collect and order this round's moves
        let mut move_uses = self.collect_moves()?;
        self.order_moves(&mut move_uses);
        let order: Vec<CharacterId> = move_uses.iter().map(MoveUse::user).collect();

        tracing::debug!(
            round,
            order = ?order
                .iter()
                .map(|id| self.state.roster.name_of(*id))
                .collect::<Vec<_>>(),
            "move order"
        );

        // 4. Start-of-turn items
        if let Some(outcome) = self.run_items(&order, ItemTrigger::StartOfTurn) {
            return Ok(Some(outcome));
        }

        // 5. Moves
        for mut move_use in move_uses {
            if !self.state.roster.is_alive(move_use.user()) {
                continue;
            }
            self.processor.process(&mut self.state, &mut move_use)?;
            self.emit(BattleEvent::MoveUsed(move_use));

            if let Some(outcome) = self.check_elimination() {
                return Ok(Some(outcome));
            }
        }

        // 6. End-of-turn items
        Ok(self.run_items(&order, ItemTrigger::EndOfTurn))
    }

    fn collect_moves(&mut self) -> Result<Vec<MoveUse>, BattleError> {
        let living: Vec<CharacterId> = self.state.roster.living().map(Character::id).collect();
        let mut move_uses = Vec::with_capacity(living.len());

        for id in living {
            let character = self
                .state
                .roster
                .get(id)
                .ok_or(BattleError::UnknownCharacter(id))?;
            let others: Vec<&Character> = self.state.roster.living_others(id).collect();

            let move_use = character
                .choose_move(&others, self.state.rng.as_mut())
                .ok_or_else(|| BattleError::NoUsableMove {
                    user: id,
                    name: character.name().to_owned(),
                })?;
            move_uses.push(move_use);
        }

        Ok(move_uses)
    }

    /// Shuffle, then stable-sort so only true ties keep the random order.
    fn order_moves(&mut self, move_uses: &mut [MoveUse]) {
        for i in (1..move_uses.len()).rev() {
            let j = self.state.rng.choose_index(i + 1);
            move_uses.swap(i, j);
        }

        let roster = &self.state.roster;
        let speed = |mu: &MoveUse| {
            roster
                .get(mu.user())
                .map_or(0.0, |c| c.stats().effective(StatKind::Speed))
        };
        move_uses.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| speed(b).total_cmp(&speed(a)))
        });
    }

    fn run_items(&mut self, order: &[CharacterId], trigger: ItemTrigger) -> Option<BattleOutcome> {
        for &holder in order {
            let Some(item_name) = self
                .state
                .roster
                .get(holder)
                .and_then(Character::item)
                .map(|item| item.name.clone())
            else {
                continue;
            };
            let Some(result) = self.processor.process_item(&mut self.state, holder, trigger)
            else {
                continue;
            };

            self.emit(BattleEvent::ItemTriggered {
                holder,
                item_name,
                trigger,
                result,
            });

            if let Some(outcome) = self.check_elimination() {
                return Some(outcome);
            }
        }
        None
    }

    fn check_elimination(&self) -> Option<BattleOutcome> {
        match self.state.roster.surviving_teams().as_slice() {
            [] => Some(BattleOutcome::NoSurvivors),
            [team] => Some(BattleOutcome::Winner(team.clone())),
            _ => None,
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleOutcome {
        tracing::info!(round = self.state.round, %outcome, "battle ended");
        self.emit(BattleEvent::BattleEnded {
            outcome: outcome.clone(),
        });
        self.outcome = Some(outcome.clone());
        outcome
    }

    fn emit(&mut self, event: BattleEvent) {
        self.sink.handle(&event, &self.state.roster);
    }
}
