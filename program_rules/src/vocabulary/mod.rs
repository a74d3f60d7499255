//! The closed vocabulary: every identifier the knowledge base may use.
//!
//! Enumerations carry identity only. Descriptive content (records, glosses)
//! lives in separate tables keyed by these values.

mod need;
mod supply;

pub use need::*;
pub use supply::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{RulesError, RulesResult};

/// Situations that activate the program's defensive or controlling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Criticism,
    Independence,
    Boundary,
    Outshine,
    Ignored,
    Accountability,
    OthersAttention,
    ExposedFlaw,
}

impl TriggerType {
    /// Every trigger in declaration order. Presentation lists are built from this.
    pub const ALL: [TriggerType; 8] = [
        TriggerType::Criticism,
        TriggerType::Independence,
        TriggerType::Boundary,
        TriggerType::Outshine,
        TriggerType::Ignored,
        TriggerType::Accountability,
        TriggerType::OthersAttention,
        TriggerType::ExposedFlaw,
    ];

    /// Stable machine key.
    pub fn key(&self) -> &'static str {
        match self {
            TriggerType::Criticism => "criticism",
            TriggerType::Independence => "independence",
            TriggerType::Boundary => "boundary",
            TriggerType::Outshine => "outshine",
            TriggerType::Ignored => "ignored",
            TriggerType::Accountability => "accountability",
            TriggerType::OthersAttention => "others_attention",
            TriggerType::ExposedFlaw => "exposed_flaw",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            TriggerType::Criticism => "Criticized or Invalidated",
            TriggerType::Independence => "Child Becomes Independent",
            TriggerType::Boundary => "Boundary Set",
            TriggerType::Outshine => "Child Outshines",
            TriggerType::Ignored => "Ignored",
            TriggerType::Accountability => "Held Accountable",
            TriggerType::OthersAttention => "Child Receives Others' Attention",
            TriggerType::ExposedFlaw => "Flaw Exposed",
        }
    }
}

impl std::fmt::Display for TriggerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TriggerType {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| RulesError::unknown_key("trigger", s))
    }
}

/// Named, recognizable tactics the program outputs.
///
/// Declaration order is the canonical catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorPattern {
    Devaluation,
    DenyFeelings,
    Gaslighting,
    /// Deny, Attack, Reverse Victim and Offender.
    Darvo,
    MoralBlackmail,
    Punishment,
    OverControl,
    PassiveAggression,
    PlayVictim,
    CompareEnvy,
    WithdrawLove,
    /// Pulling a third party in to compare, carry messages, or take sides.
    Triangulation,
}

impl BehaviorPattern {
    pub const ALL: [BehaviorPattern; 12] = [
        BehaviorPattern::Devaluation,
        BehaviorPattern::DenyFeelings,
        BehaviorPattern::Gaslighting,
        BehaviorPattern::Darvo,
        BehaviorPattern::MoralBlackmail,
        BehaviorPattern::Punishment,
        BehaviorPattern::OverControl,
        BehaviorPattern::PassiveAggression,
        BehaviorPattern::PlayVictim,
        BehaviorPattern::CompareEnvy,
        BehaviorPattern::WithdrawLove,
        BehaviorPattern::Triangulation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BehaviorPattern::Devaluation => "devaluation",
            BehaviorPattern::DenyFeelings => "deny_feelings",
            BehaviorPattern::Gaslighting => "gaslighting",
            BehaviorPattern::Darvo => "darvo",
            BehaviorPattern::MoralBlackmail => "moral_blackmail",
            BehaviorPattern::Punishment => "punishment",
            BehaviorPattern::OverControl => "over_control",
            BehaviorPattern::PassiveAggression => "passive_aggression",
            BehaviorPattern::PlayVictim => "play_victim",
            BehaviorPattern::CompareEnvy => "compare_envy",
            BehaviorPattern::WithdrawLove => "withdraw_love",
            BehaviorPattern::Triangulation => "triangulation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BehaviorPattern::Devaluation => "Devaluation",
            BehaviorPattern::DenyFeelings => "Deny Feelings",
            BehaviorPattern::Gaslighting => "Gaslighting",
            BehaviorPattern::Darvo => "DARVO",
            BehaviorPattern::MoralBlackmail => "Moral Blackmail",
            BehaviorPattern::Punishment => "Punishment",
            BehaviorPattern::OverControl => "Over-Control",
            BehaviorPattern::PassiveAggression => "Passive Aggression",
            BehaviorPattern::PlayVictim => "Play Victim",
            BehaviorPattern::CompareEnvy => "Compare & Envy",
            BehaviorPattern::WithdrawLove => "Withdraw Love",
            BehaviorPattern::Triangulation => "Triangulation",
        }
    }
}

impl std::fmt::Display for BehaviorPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BehaviorPattern {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| RulesError::unknown_key("pattern", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(TriggerType::ALL.len(), 8);
        assert_eq!(BehaviorPattern::ALL.len(), 12);

        let unique: HashSet<_> = BehaviorPattern::ALL.iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = BehaviorPattern::ALL;
        sorted.sort();
        assert_eq!(sorted, BehaviorPattern::ALL);

        let mut sorted = TriggerType::ALL;
        sorted.sort();
        assert_eq!(sorted, TriggerType::ALL);
    }

    #[test]
    fn test_keys_parse_back() {
        for trigger in TriggerType::ALL {
            assert_eq!(trigger.key().parse::<TriggerType>(), Ok(trigger));
        }
        for pattern in BehaviorPattern::ALL {
            assert_eq!(pattern.key().parse::<BehaviorPattern>(), Ok(pattern));
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "Boundary Set".parse::<TriggerType>().unwrap_err();
        assert!(matches!(err, RulesError::UnknownKey { kind: "trigger", .. }));
        assert!("DARVO".parse::<BehaviorPattern>().is_err());
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&TriggerType::OthersAttention).unwrap();
        assert_eq!(json, "\"others_attention\"");

        for pattern in BehaviorPattern::ALL {
            let json = serde_json::to_string(&pattern).unwrap();
            assert_eq!(json, format!("\"{}\"", pattern.key()));
        }
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(TriggerType::Accountability.to_string(), "Held Accountable");
        assert_eq!(BehaviorPattern::CompareEnvy.to_string(), "Compare & Envy");
    }
}
