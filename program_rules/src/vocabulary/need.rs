//! Core needs - the root motivations behind every modeled behavior.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{RulesError, RulesResult};

/// The three core needs the program runs to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreNeed {
    /// Expansion: look godlike, always right, above everyone else.
    MaintainNarcissism,
    /// Survival: keep a source of supply close and prevent isolation.
    ControlSupply,
    /// Defense: hide inner weakness, never admit fault.
    AvoidShameExposure,
}

impl CoreNeed {
    pub const ALL: [CoreNeed; 3] = [
        CoreNeed::MaintainNarcissism,
        CoreNeed::ControlSupply,
        CoreNeed::AvoidShameExposure,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CoreNeed::MaintainNarcissism => "maintain_narcissism",
            CoreNeed::ControlSupply => "control_supply",
            CoreNeed::AvoidShameExposure => "avoid_shame_exposure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoreNeed::MaintainNarcissism => "Maintain Narcissism & Superiority",
            CoreNeed::ControlSupply => "Control Supply Proximity",
            CoreNeed::AvoidShameExposure => "Avoid Shame & Exposure",
        }
    }

    /// How the need shows up in behavior, and the motive underneath it.
    pub fn description(&self) -> &'static str {
        match self {
            CoreNeed::MaintainNarcissism => {
                "Expression: putting you down, nitpicking, denying your feelings, twisting facts, \
                 having to be the best and the most right, comparison and envy, triangulating to \
                 stay at the center. Essence: the expansion need - to look godlike, always right \
                 and above everyone else (status and importance included)."
            }
            CoreNeed::ControlSupply => {
                "Expression: moral blackmail, guilt-tripping, manufactured guilt, broken \
                 boundaries, punishing 'disobedience', withdrawing love, playing the victim. \
                 Essence: the survival need - making sure you keep providing emotional feedback, \
                 labor or a place to dump feelings, never leave, and never let isolation happen."
            }
            CoreNeed::AvoidShameExposure => {
                "Expression: extreme sensitivity to criticism or rejection, denying facts and \
                 feelings, counterattacking whoever exposes them, avoiding situations where \
                 failure is possible. Essence: the defense need - shame and negative judgment \
                 are unbearable, so nothing is ever admitted and denial and attack keep the \
                 perfect facade intact."
            }
        }
    }
}

impl std::fmt::Display for CoreNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CoreNeed {
    type Err = RulesError;

    fn from_str(s: &str) -> RulesResult<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.key() == s)
            .ok_or_else(|| RulesError::unknown_key("need", s))
    }
}
