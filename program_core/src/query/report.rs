//! The per-trigger report consumed by presentation.

use program_rules::{BehaviorPattern, CoreNeed, PatternRecord, TriggerType};
use serde::{Deserialize, Serialize};

pub const CORE_NEEDS_HEADING: &str = "[Core Needs]";
pub const ESCALATION_HEADING: &str = "[Supply Escalation Path]";
pub const SECTION_SEPARATOR: &str = "---";

/// Closing line of every trigger paragraph.
pub const REASSURANCE: &str =
    "→ These behaviors are predictable program output, not caused by something you did wrong.";

/// A core need with its label and description, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedSummary {
    pub need: CoreNeed,
    pub label: String,
    pub description: String,
}

impl NeedSummary {
    pub fn new(need: CoreNeed) -> Self {
        Self {
            need,
            label: need.label().to_string(),
            description: need.description().to_string(),
        }
    }

    /// Summaries for every core need, in declaration order.
    pub fn all() -> Vec<Self> {
        CoreNeed::ALL.into_iter().map(Self::new).collect()
    }

    /// Label line, indented description, blank separator.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("  · {}", self.label),
            format!("    {}", self.description),
            String::new(),
        ]
    }
}

/// Format the paragraph describing a trigger and the patterns it activates.
pub fn trigger_paragraph(
    trigger: TriggerType,
    gloss: &str,
    patterns: &[BehaviorPattern],
) -> String {
    let names = if patterns.is_empty() {
        "(none configured)".to_string()
    } else {
        patterns
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Trigger: {}\nMeaning: {}\nLikely patterns: {}\n{}",
        trigger.label(),
        gloss,
        names,
        REASSURANCE
    )
}

/// Everything relevant to one trigger: the fixed need and escalation
/// summaries, then the trigger itself and its records in priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerReport {
    /// All three core needs, regardless of trigger.
    pub needs: Vec<NeedSummary>,

    /// General escalation policy, not trigger-specific.
    pub escalation_summary: Vec<String>,

    pub trigger: TriggerType,

    /// The trigger's gloss.
    pub trigger_description: String,

    /// Activated patterns, most characteristic first.
    pub patterns: Vec<BehaviorPattern>,

    /// Full records for `patterns`, same order.
    pub cards: Vec<PatternRecord>,
}

impl TriggerReport {
    /// Render the report as display lines.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(CORE_NEEDS_HEADING.to_string());
        for need in &self.needs {
            lines.extend(need.lines());
        }

        lines.push(ESCALATION_HEADING.to_string());
        lines.extend(self.escalation_summary.iter().cloned());
        lines.push(SECTION_SEPARATOR.to_string());
        lines.push(String::new());

        let paragraph = trigger_paragraph(self.trigger, &self.trigger_description, &self.patterns);
        lines.extend(paragraph.lines().map(str::to_string));
        lines.push(String::new());

        for card in &self.cards {
            lines.push(format!("[{}]", card.pattern.label()));
            lines.push(format!("  Expression: {}", card.description));
            lines.push(format!("  Healing note: {}", card.healing_note));
            lines.push(String::new());
        }

        lines
    }
}
