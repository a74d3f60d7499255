//! Supply types and the escalation levels that rank them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{RulesError, RulesResult};

/// External validation the program seeks, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    /// Default: praise, compliance, attention.
    Admiration,
    /// When admiration runs short: threats, yelling, punishment.
    Fear,
    /// When fear stops working: playing the victim, crying, self-pity.
    Pity,
}

impl SupplyType {
    pub const ALL: [SupplyType; 3] = [SupplyType::Admiration, SupplyType::Fear, SupplyType::Pity];

    pub fn key(&self) -> &'static str {
        match self {
            SupplyType::Admiration => "admiration",
            SupplyType::Fear => "fear",
            SupplyType::Pity => "pity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupplyType::Admiration => "Admiration",
            SupplyType::Fear => "Fear",
            SupplyType::Pity => "Pity",
        }
    }

    /// What pursuing this supply looks like.
    pub fn gloss(&self) -> &'static str {
        match self {
            SupplyType::Admiration => "praise, compliance and attention",
            SupplyType::Fear => "threats, yelling and punishment that bind you through fear",
            SupplyType::Pity => "playing the victim, crying and self-pity to win care and guilt",
        }
    }

    /// The escalation level at which this supply is pursued.
    pub fn level(&self) -> EscalationLevel {
        match self {
            SupplyType::Admiration => EscalationLevel::First,
            SupplyType::Fear => EscalationLevel::Second,
            SupplyType::Pity => EscalationLevel::Third,
        }
    }
}

impl std::fmt::Display for SupplyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SupplyType {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| RulesError::unknown_key("supply", s))
    }
}

/// Ordinal rank of a supply type in the escalation order. Informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationLevel {
    /// Normal operation.
    First,
    /// Activated when the child questions, withdraws, or stops praising.
    Second,
    /// Activated when fear no longer controls: "I am the real victim".
    Third,
}

impl EscalationLevel {
    pub const ALL: [EscalationLevel; 3] = [
        EscalationLevel::First,
        EscalationLevel::Second,
        EscalationLevel::Third,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EscalationLevel::First => "first",
            EscalationLevel::Second => "second",
            EscalationLevel::Third => "third",
        }
    }

    /// 1-based rank.
    pub fn rank(&self) -> u8 {
        match self {
            EscalationLevel::First => 1,
            EscalationLevel::Second => 2,
            EscalationLevel::Third => 3,
        }
    }

    /// The supply type pursued at this level.
    pub fn supply(&self) -> SupplyType {
        match self {
            EscalationLevel::First => SupplyType::Admiration,
            EscalationLevel::Second => SupplyType::Fear,
            EscalationLevel::Third => SupplyType::Pity,
        }
    }
}

impl std::fmt::Display for EscalationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {}", self.rank())
    }
}

impl FromStr for EscalationLevel {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| RulesError::unknown_key("escalation level", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_parallel_supply() {
        for (level, supply) in EscalationLevel::ALL.into_iter().zip(SupplyType::ALL) {
            assert_eq!(level.supply(), supply);
            assert_eq!(supply.level(), level);
        }
    }

    #[test]
    fn test_ranks() {
        let ranks: Vec<u8> = EscalationLevel::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(EscalationLevel::Second.to_string(), "level 2");
    }

    #[test]
    fn test_supply_preference_order() {
        assert!(SupplyType::Admiration < SupplyType::Fear);
        assert!(SupplyType::Fear < SupplyType::Pity);
    }

    #[test]
    fn test_supply_keys() {
        assert_eq!("pity".parse::<SupplyType>(), Ok(SupplyType::Pity));
        assert_eq!("third".parse::<EscalationLevel>(), Ok(EscalationLevel::Third));
        assert!("shame".parse::<SupplyType>().is_err());
    }
}
