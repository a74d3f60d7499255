//! Escalation Rule - the fallback order in which supply is pursued.

use crate::vocabulary::{EscalationLevel, SupplyType};

/// The supply types the program may reach for.
///
/// When the current supply is holding, only admiration is sought. When it is
/// failing, the full path from the top is returned: admiration, then fear,
/// then pity. The rule is a one-shot decision with no memory of prior calls;
/// it narrates possible escalation rather than tracking a live interaction.
pub fn escalation_path(current_supply_failing: bool) -> Vec<SupplyType> {
    if !current_supply_failing {
        return vec![SupplyType::Admiration];
    }
    EscalationLevel::ALL.iter().map(|l| l.supply()).collect()
}

/// Fixed, trigger-independent summary of the escalation policy.
pub fn escalation_summary() -> Vec<String> {
    let path = EscalationLevel::ALL
        .iter()
        .map(|level| format!("{} ({})", level.supply().label(), level))
        .collect::<Vec<_>>()
        .join(" → ");

    vec![
        format!("  {}", path),
        "  When admiration runs short the program escalates to fear (threats, punishment); \
         when fear fails it turns to pity (playing the victim, self-pity)."
            .to_string(),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_holding() {
        assert_eq!(escalation_path(false), vec![SupplyType::Admiration]);
    }

    #[test]
    fn test_supply_failing() {
        assert_eq!(
            escalation_path(true),
            vec![SupplyType::Admiration, SupplyType::Fear, SupplyType::Pity]
        );
    }

    #[test]
    fn test_path_is_stateless() {
        let first = escalation_path(true);
        let _ = escalation_path(false);
        assert_eq!(escalation_path(true), first);

        for failing in [false, true] {
            let len = escalation_path(failing).len();
            assert!(len == 1 || len == 3);
        }
    }

    #[test]
    fn test_summary() {
        let summary = escalation_summary();
        assert_eq!(summary.len(), 3);
        assert_eq!(
            summary[0],
            "  Admiration (level 1) → Fear (level 2) → Pity (level 3)"
        );
        assert!(summary[2].is_empty());
    }
}
