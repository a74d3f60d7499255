//! Trigger Map - which behavior patterns each situation is known to activate.

use std::collections::HashMap;

use crate::error::{RulesError, RulesResult};
use crate::vocabulary::{BehaviorPattern, TriggerType};

/// Fixed table from trigger to an ordered list of patterns, plus the one-line
/// gloss for each trigger.
///
/// Pattern order is meaningful: most characteristic first.
#[derive(Debug, Clone, Default)]
pub struct TriggerMap {
    associations: HashMap<TriggerType, Vec<BehaviorPattern>>,
    glosses: HashMap<TriggerType, String>,
}

impl TriggerMap {
    /// Create an empty trigger map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The curated associations and glosses.
    pub fn standard() -> Self {
        use crate::vocabulary::BehaviorPattern::*;

        Self::new()
            .with_patterns(
                TriggerType::Criticism,
                [Darvo, Gaslighting, DenyFeelings, PassiveAggression],
            )
            .with_gloss(
                TriggerType::Criticism,
                "Any signal that they are not good enough, wrong, or worse than someone else",
            )
            .with_patterns(
                TriggerType::Independence,
                [MoralBlackmail, PlayVictim, WithdrawLove, OverControl],
            )
            .with_gloss(
                TriggerType::Independence,
                "You reduce contact, make your own decisions, stop depending on them",
            )
            .with_patterns(
                TriggerType::Boundary,
                [MoralBlackmail, Punishment, DenyFeelings, OverControl],
            )
            .with_gloss(
                TriggerType::Boundary,
                "You say no, ask for privacy, refuse to be controlled",
            )
            .with_patterns(
                TriggerType::Outshine,
                [Devaluation, CompareEnvy, PassiveAggression, PlayVictim],
            )
            .with_gloss(
                TriggerType::Outshine,
                "You succeed, get recognized, no longer need them",
            )
            .with_patterns(TriggerType::Ignored, [PlayVictim, PassiveAggression, Triangulation])
            .with_gloss(
                TriggerType::Ignored,
                "The focus is not on them; nobody is praising or looking after them",
            )
            .with_patterns(
                TriggerType::Accountability,
                [Darvo, Gaslighting, PlayVictim, MoralBlackmail],
            )
            .with_gloss(
                TriggerType::Accountability,
                "You point out harmful behavior, ask for an apology or a change",
            )
            .with_patterns(
                TriggerType::OthersAttention,
                [CompareEnvy, Devaluation, Triangulation],
            )
            .with_gloss(
                TriggerType::OthersAttention,
                "Someone else is praised or loved, and they are not the center",
            )
            .with_patterns(
                TriggerType::ExposedFlaw,
                [Darvo, Gaslighting, DenyFeelings, PassiveAggression],
            )
            .with_gloss(
                TriggerType::ExposedFlaw,
                "Their mistakes, incompetence or shortcomings become visible",
            )
    }

    /// Set the ordered pattern list for a trigger, replacing any previous list.
    pub fn with_patterns(
        mut self,
        trigger: TriggerType,
        patterns: impl IntoIterator<Item = BehaviorPattern>,
    ) -> Self {
        self.associations
            .insert(trigger, patterns.into_iter().collect());
        self
    }

    /// Set the gloss for a trigger.
    pub fn with_gloss(mut self, trigger: TriggerType, gloss: impl Into<String>) -> Self {
        self.glosses.insert(trigger, gloss.into());
        self
    }

    /// Patterns the trigger activates, in priority order.
    ///
    /// A trigger with no configured associations yields an empty slice.
    pub fn patterns_for(&self, trigger: TriggerType) -> &[BehaviorPattern] {
        self.associations
            .get(&trigger)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The trigger's one-line gloss.
    pub fn description_of(&self, trigger: TriggerType) -> RulesResult<&str> {
        self.glosses
            .get(&trigger)
            .map(|s| s.as_str())
            .ok_or(RulesError::GlossNotFound(trigger))
    }

    /// Reverse lookup: every trigger that activates `pattern`, in trigger
    /// declaration order.
    pub fn triggers_for(&self, pattern: BehaviorPattern) -> Vec<TriggerType> {
        TriggerType::ALL
            .into_iter()
            .filter(|t| self.patterns_for(*t).contains(&pattern))
            .collect()
    }

    /// Iterate over configured associations in trigger declaration order.
    pub fn associations(&self) -> impl Iterator<Item = (TriggerType, &[BehaviorPattern])> {
        TriggerType::ALL
            .into_iter()
            .filter_map(move |t| self.associations.get(&t).map(|v| (t, v.as_slice())))
    }
}
