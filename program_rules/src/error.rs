//! Error types for the rulebook tables.

use thiserror::Error;

use crate::vocabulary::{BehaviorPattern, TriggerType};

/// Errors raised while building or querying the rulebook tables.
///
/// Apart from `UnknownKey`, every variant signals broken static data: it is a
/// construction-time defect, never a user-input condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("not found: no pattern record for {0}")]
    PatternNotFound(BehaviorPattern),

    #[error("not found: no gloss for trigger {0}")]
    GlossNotFound(TriggerType),

    #[error("duplicate pattern record for {0}")]
    DuplicateRecord(BehaviorPattern),

    #[error("pattern catalog is missing a record for {0}")]
    MissingRecord(BehaviorPattern),

    #[error("trigger {trigger} references {pattern}, which has no pattern record")]
    DanglingAssociation {
        trigger: TriggerType,
        pattern: BehaviorPattern,
    },

    #[error("unknown {kind} key '{key}'")]
    UnknownKey { kind: &'static str, key: String },
}

impl RulesError {
    /// Whether this error belongs to the not-found family (a lookup into a
    /// table that should contain the key by construction).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RulesError::PatternNotFound(_) | RulesError::GlossNotFound(_)
        )
    }

    pub(crate) fn unknown_key(kind: &'static str, key: &str) -> Self {
        RulesError::UnknownKey {
            kind,
            key: key.to_string(),
        }
    }
}

/// Result type for rulebook operations.
pub type RulesResult<T> = Result<T, RulesError>;
