//! Move resolution.
//!
//! [`MoveProcessor`] turns one committed [`MoveUse`] into an outcome and
//! per-action results against the shared [`BattleState`].

use crate::action::{ActionContext, ActionResults, ActionSource, execute_action};
use crate::character::ItemTrigger;
use crate::config::BattleConfig;
use crate::history::{ActionHistory, HistoryEntry, MoveRecord};
use crate::moves::MoveUseResult;
use crate::rng::BattleRandom;
use crate::roster::{CharacterId, Roster};

use super::errors::ProcessError;
use super::move_use::MoveUse;

/// Everything a battle mutates while it runs.
pub struct BattleState {
    /// Current round, starting at 1 once the first round begins.
    pub round: u32,
    pub roster: Roster,
    pub history: ActionHistory,
    pub rng: Box<dyn BattleRandom>,
    pub config: BattleConfig,
}

impl BattleState {
    pub fn new(roster: Roster, rng: Box<dyn BattleRandom>) -> Self {
        Self {
            round: 0,
            roster,
            history: ActionHistory::new(),
            rng,
            config: BattleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    fn action_context(&mut self, user: CharacterId, source: ActionSource) -> ActionContext<'_> {
        ActionContext {
            round: self.round,
            user,
            source,
            roster: &mut self.roster,
            history: &mut self.history,
            rng: self.rng.as_mut(),
            config: &self.config,
        }
    }
}

/// Resolves moves and item actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveProcessor;

impl MoveProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Process `move_use`, filling in its outcome and results.
    ///
    /// ## Execution Flow
    /// 1. Spend one use of the move (exhausted moves are rejected)
    /// 2. Expire protection the user was granted in an earlier round
    /// 3. Evaluate the success rule and record the move
    /// 4. On success, execute each action in declared order
    pub fn process(
        &self,
        state: &mut BattleState,
        move_use: &mut MoveUse,
    ) -> Result<(), ProcessError> {
        let user_id = move_use.user();
        let move_index = move_use.move_index();
        let round = state.round;

        // 1. Spend one use regardless of the outcome
        let user = state
            .roster
            .get_mut(user_id)
            .ok_or(ProcessError::UnknownCharacter(user_id))?;
        let mv = user
            .moves_mut()
            .get_mut(move_index)
            .ok_or(ProcessError::UnknownMove {
                user: user_id,
                move_index,
            })?;
        if !mv.spend_use() {
            return Err(ProcessError::MoveExhausted {
                user: user_id,
                move_name: mv.name.clone(),
            });
        }
        let move_name = mv.name.clone();
        let success = mv.success.clone();
        let actions = mv.actions.clone();

        // 2. Protection lasts until the holder's next turn
        if let Some(expired) = user.expire_protection(round) {
            tracing::debug!(
                user = %user.name(),
                granted_round = expired.granted_round,
                "protection expired"
            );
        }

        // 3. Success rule, then the move record
        let outcome = success.evaluate(user_id, move_index, &state.history, state.rng.as_mut());
        state.history.record(HistoryEntry::Move(MoveRecord {
            round,
            user: user_id,
            move_index,
            move_name,
            result: outcome,
        }));
        move_use.set_outcome(outcome);

        tracing::debug!(
            user = %state.roster.name_of(user_id),
            mv = %move_use.move_name(),
            %outcome,
            "move resolved"
        );

        if outcome != MoveUseResult::Success {
            return Ok(());
        }

        // 4. Actions, each against the roster as the previous one left it
        let mut ctx = state.action_context(user_id, ActionSource::Move { move_index });
        for (action_index, action) in actions.iter().enumerate() {
            let result = execute_action(
                action,
                action_index,
                move_use.chosen_target(action_index),
                &mut ctx,
            );
            move_use.push_result(result);
        }

        Ok(())
    }

    /// Run the `trigger` action of `holder`'s item, if it has one and is alive.
    pub fn process_item(
        &self,
        state: &mut BattleState,
        holder: CharacterId,
        trigger: ItemTrigger,
    ) -> Option<ActionResults> {
        let character = state.roster.get(holder).filter(|c| c.is_alive())?;
        let action = character.item()?.action(trigger)?.clone();

        let mut ctx = state.action_context(holder, ActionSource::Item(trigger));
        Some(execute_action(&action, 0, None, &mut ctx))
    }
}
