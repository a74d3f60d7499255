//! Query Engine - read-only composite questions over the knowledge base.
//!
//! Every operation is a deterministic lookup over in-memory tables:
//! 1. **Resolve**: trigger -> ordered patterns (Trigger Map)
//! 2. **Expand**: pattern -> record (Pattern Catalog), order preserved
//! 3. **Format**: records and glosses -> plain text for presentation

mod report;

pub use report::*;

use program_rules::{
    escalation_summary, BehaviorPattern, CoreNeed, PatternRecord, RulesResult, TriggerType,
};
use tracing::debug;

use crate::knowledge_base::KnowledgeBase;

/// Read-only view answering questions about a `KnowledgeBase`.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> QueryEngine<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    /// The core need's fixed description.
    pub fn describe_need(&self, need: CoreNeed) -> &'static str {
        need.description()
    }

    /// The trigger's one-line gloss.
    pub fn describe_trigger(&self, trigger: TriggerType) -> RulesResult<&'kb str> {
        self.kb.triggers().description_of(trigger)
    }

    /// Patterns the trigger activates, in priority order.
    pub fn patterns_for_trigger(&self, trigger: TriggerType) -> &'kb [BehaviorPattern] {
        self.kb.triggers().patterns_for(trigger)
    }

    /// Full records for the trigger's patterns, in the same order.
    ///
    /// Fails only if the trigger map and catalog disagree, which `KnowledgeBase`
    /// construction already rules out.
    pub fn cards_for_trigger(&self, trigger: TriggerType) -> RulesResult<Vec<&'kb PatternRecord>> {
        self.patterns_for_trigger(trigger)
            .iter()
            .map(|&pattern| self.kb.catalog().record_of(pattern))
            .collect()
    }

    /// Triggers known to activate `pattern`.
    pub fn triggers_for_pattern(&self, pattern: BehaviorPattern) -> Vec<TriggerType> {
        self.kb.triggers().triggers_for(pattern)
    }

    pub fn records_by_need(&self, need: CoreNeed) -> Vec<&'kb PatternRecord> {
        self.kb.catalog().records_by_need(need)
    }

    pub fn all_records(&self) -> &'kb [PatternRecord] {
        self.kb.catalog().all_records()
    }

    /// A readable paragraph: what the trigger is and which patterns it sets off.
    pub fn describe_trigger_and_patterns(&self, trigger: TriggerType) -> RulesResult<String> {
        let gloss = self.describe_trigger(trigger)?;
        Ok(trigger_paragraph(
            trigger,
            gloss,
            self.patterns_for_trigger(trigger),
        ))
    }

    /// One formatted block per catalog record, in catalog order.
    pub fn all_patterns_with_healing_notes(&self) -> Vec<String> {
        self.all_records()
            .iter()
            .map(|record| record.summary_block())
            .collect()
    }

    /// Label and description for all three core needs.
    pub fn core_need_summary(&self) -> Vec<String> {
        NeedSummary::all().iter().flat_map(|n| n.lines()).collect()
    }

    /// Core need labels only, for compact headers.
    pub fn core_need_headlines(&self) -> Vec<String> {
        let mut lines = vec![CORE_NEEDS_HEADING.to_string(), String::new()];
        lines.extend(CoreNeed::ALL.iter().map(|need| format!("  · {}", need.label())));
        lines
    }

    /// Everything relevant to one situation, as structured data.
    pub fn build_report(&self, trigger: TriggerType) -> RulesResult<TriggerReport> {
        let patterns = self.patterns_for_trigger(trigger);
        let cards = self.cards_for_trigger(trigger)?;
        debug!(trigger = trigger.key(), cards = cards.len(), "building trigger report");

        Ok(TriggerReport {
            needs: NeedSummary::all(),
            escalation_summary: escalation_summary(),
            trigger,
            trigger_description: self.describe_trigger(trigger)?.to_string(),
            patterns: patterns.to_vec(),
            cards: cards.into_iter().cloned().collect(),
        })
    }

    /// The canonical "everything relevant to this situation" view, as lines.
    pub fn full_report_for_trigger(&self, trigger: TriggerType) -> RulesResult<Vec<String>> {
        Ok(self.build_report(trigger)?.to_lines())
    }
}
