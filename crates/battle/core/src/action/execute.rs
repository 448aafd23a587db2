//! Per-action execution pipeline.
//!
//! Shared by moves and items. For each action:
//!
//! 1. Spend the user's protect charge (Protect actions only)
//! 2. Resolve targets against the live roster
//! 3. Per target: consume opposing protection or apply the effect
//! 4. Record the outcome in the action history

use crate::character::ItemTrigger;
use crate::config::BattleConfig;
use crate::history::{ActionHistory, ActionRecord, HistoryEntry};
use crate::rng::BattleRandom;
use crate::roster::{CharacterId, Roster};

use super::result::{ActionResults, EffectValue, TargetResult};
use super::{Action, ActionKind};

/// What caused an action to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionSource {
    /// An action of the user's move at `move_index`.
    Move { move_index: usize },
    /// An action of the user's held item.
    Item(ItemTrigger),
}

/// Mutable battle state an action runs against.
pub(crate) struct ActionContext<'a> {
    pub round: u32,
    pub user: CharacterId,
    pub source: ActionSource,
    pub roster: &'a mut Roster,
    pub history: &'a mut ActionHistory,
    pub rng: &'a mut dyn BattleRandom,
    pub config: &'a BattleConfig,
}

/// View of the battle handed to an effect for a single target.
pub(crate) struct EffectContext<'a> {
    pub round: u32,
    pub user: CharacterId,
    pub target: CharacterId,
    pub source: ActionSource,
    pub roster: &'a mut Roster,
    pub history: &'a ActionHistory,
    pub config: &'a BattleConfig,
}

/// Execute one action and record every target it touched.
pub(crate) fn execute_action(
    action: &Action,
    action_index: usize,
    chosen: Option<CharacterId>,
    ctx: &mut ActionContext<'_>,
) -> ActionResults {
    let kind = action.kind();

    // 1. Protect spends one of the user's charges, or does nothing at all
    if kind == ActionKind::Protect {
        let spent = ctx
            .roster
            .get_mut(ctx.user)
            .is_some_and(|user| user.spend_protect_charge());
        if !spent {
            tracing::debug!(user = ?ctx.user, "protect failed: no charges left");
            // The attempt is recorded against the user, with nothing applied
            ctx.history.record(HistoryEntry::Action(ActionRecord {
                round: ctx.round,
                user: ctx.user,
                source: ctx.source,
                kind,
                target: ctx.user,
                protected: false,
                value: EffectValue::Suppressed,
            }));
            return ActionResults::failed(action_index, kind);
        }
    }

    // 2. Resolve targets
    let targets = action.target.resolve(
        ctx.user,
        chosen,
        ctx.roster,
        ctx.history,
        &mut *ctx.rng,
    );

    let mut results = Vec::with_capacity(targets.len());
    for target in targets {
        // An earlier target of this action may have changed the roster
        if !ctx.roster.is_alive(target) {
            continue;
        }

        // 3. Opposing protection absorbs the action and is consumed
        let result = if ctx.roster.are_opponents(ctx.user, target)
            && ctx
                .roster
                .get_mut(target)
                .is_some_and(|t| t.take_protection().is_some())
        {
            tracing::debug!(user = ?ctx.user, defender = ?target, %kind, "action blocked by protection");
            TargetResult::protected(target)
        } else {
            let mut effect_ctx = EffectContext {
                round: ctx.round,
                user: ctx.user,
                target,
                source: ctx.source,
                roster: &mut *ctx.roster,
                history: &*ctx.history,
                config: ctx.config,
            };
            TargetResult::applied(target, action.effect.apply(&mut effect_ctx))
        };

        // 4. Record
        ctx.history.record(HistoryEntry::Action(ActionRecord {
            round: ctx.round,
            user: ctx.user,
            source: ctx.source,
            kind,
            target,
            protected: result.protected,
            value: result.value.clone(),
        }));
        results.push(result);
    }

    ActionResults {
        action_index,
        kind,
        success: true,
        results,
    }
}
