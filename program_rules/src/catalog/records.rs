//! The curated pattern records.

use super::PatternRecord;
use crate::vocabulary::{BehaviorPattern, CoreNeed};

/// Build the standard set of pattern records, one per behavior pattern.
pub fn standard_records() -> Vec<PatternRecord> {
    vec![
        PatternRecord::new(
            BehaviorPattern::Devaluation,
            CoreNeed::MaintainNarcissism,
            "Puts you down (looks, abilities, choices) to set off their own superiority, or the \
             rightness of 'doing it for your own good'.",
            "The put-downs reflect their own comparing and insecurity, not your actual worth.",
        ),
        PatternRecord::new(
            BehaviorPattern::DenyFeelings,
            CoreNeed::AvoidShameExposure,
            "Denies your feelings ('it can't hurt that much', 'you're overthinking it') until you \
             doubt your own experience.",
            "Your feelings are real. What is being denied is their capacity for empathy, not what \
             you feel.",
        ),
        PatternRecord::new(
            BehaviorPattern::Gaslighting,
            CoreNeed::AvoidShameExposure,
            "Distorts facts, denies things they said, and makes you doubt your memory and judgment \
             so they can escape responsibility.",
            "Keeping notes and checking with people you trust helps anchor 'my memory is right'.",
        ),
        PatternRecord::new(
            BehaviorPattern::Darvo,
            CoreNeed::AvoidShameExposure,
            "Deny, then Attack you, then Reverse Victim and Offender so that they become the one \
             who was wronged.",
            "This is the program's response to being held to account, not a sign that you \
             'shouldn't have brought it up'.",
        ),
        PatternRecord::new(
            BehaviorPattern::MoralBlackmail,
            CoreNeed::ControlSupply,
            "Uses 'after everything I've done for you' or 'you're ungrateful' to make you feel \
             guilty, so that you comply or stay.",
            "The guilt is set off by the program. It does not mean you owe them unlimited \
             obedience.",
        ),
        PatternRecord::new(
            BehaviorPattern::Punishment,
            CoreNeed::ControlSupply,
            "Uses coldness, yelling and punishment to make you afraid or compliant and keep \
             control.",
            "Fear is one form of supply; the fear you feel is exactly what the program is built \
             to produce.",
        ),
        PatternRecord::new(
            BehaviorPattern::OverControl,
            CoreNeed::ControlSupply,
            "Controls your friendships, choices, appearance and whereabouts, eroding your \
             autonomy to keep you dependent.",
            "Your boundaries and autonomy are legitimate and do not need their approval.",
        ),
        PatternRecord::new(
            BehaviorPattern::PassiveAggression,
            CoreNeed::MaintainNarcissism,
            "Never states displeasure directly; punishes you with sarcasm, stalling, 'forgetting' \
             or a cold face.",
            "Once you name it as passive aggression, you can stop searching yourself for 'what \
             did I do wrong this time'.",
        ),
        PatternRecord::new(
            BehaviorPattern::PlayVictim,
            CoreNeed::ControlSupply,
            "Becomes 'the one who is hurt most' in any conflict: crying, falling ill, self-pity, \
             to draw out your care and guilt.",
            "This is the 'pity' stage of supply escalation; you can choose not to take the role \
             offered to you.",
        ),
        PatternRecord::new(
            BehaviorPattern::CompareEnvy,
            CoreNeed::MaintainNarcissism,
            "Compares you with others, or envies you for being praised or loved, and restores \
             superiority by putting you down or grabbing the attention back.",
            "Your worth needs no certificate from them; the envy belongs to their inner program.",
        ),
        PatternRecord::new(
            BehaviorPattern::WithdrawLove,
            CoreNeed::ControlSupply,
            "Threatens with coldness, distance or 'you're no child of mine', so that you comply \
             to win love back.",
            "Love used as a condition and a bargaining chip is a control tactic, not your fault.",
        ),
        PatternRecord::new(
            BehaviorPattern::Triangulation,
            CoreNeed::MaintainNarcissism,
            "Pulls in siblings, relatives or outsiders to compare, carry messages and take sides, \
             creating division and competition.",
            "Triangulation divides and rules to keep them at the center; seeing the structure \
             helps you stay out of it.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_records_text_present() {
        for record in standard_records() {
            assert!(!record.description.trim().is_empty());
            assert!(!record.healing_note.trim().is_empty());
        }
    }

    #[test]
    fn test_need_assignment() {
        let records = standard_records();
        let need_of = |pattern| {
            records
                .iter()
                .find(|r| r.pattern == pattern)
                .map(|r| r.serves_need)
        };

        assert_eq!(need_of(BehaviorPattern::Darvo), Some(CoreNeed::AvoidShameExposure));
        assert_eq!(need_of(BehaviorPattern::PlayVictim), Some(CoreNeed::ControlSupply));
        assert_eq!(need_of(BehaviorPattern::Triangulation), Some(CoreNeed::MaintainNarcissism));
    }
}
