//! Knowledge Base - the validated, read-only bundle every query runs against.

use program_rules::{PatternCatalog, RulesError, RulesResult, TriggerMap, TriggerType};
use tracing::{debug, info};

use crate::query::QueryEngine;

/// The pattern catalog and trigger map, checked against each other and frozen.
///
/// Nothing is written after construction, so a `KnowledgeBase` can be shared
/// between threads (for example behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    catalog: PatternCatalog,
    triggers: TriggerMap,
}

impl KnowledgeBase {
    /// Build and validate the curated knowledge base.
    pub fn load() -> RulesResult<Self> {
        let catalog = PatternCatalog::standard()?;
        let kb = Self::from_parts(catalog, TriggerMap::standard())?;

        info!(
            records = kb.catalog.len(),
            triggers = TriggerType::ALL.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    /// Validate a catalog and trigger map as one unit.
    ///
    /// Every trigger must have a gloss and every associated pattern must have
    /// a record in the catalog.
    pub fn from_parts(catalog: PatternCatalog, triggers: TriggerMap) -> RulesResult<Self> {
        for trigger in TriggerType::ALL {
            triggers.description_of(trigger)?;
        }

        for (trigger, patterns) in triggers.associations() {
            if let Some(&pattern) = patterns.iter().find(|p| !catalog.contains(**p)) {
                return Err(RulesError::DanglingAssociation { trigger, pattern });
            }
            debug!(trigger = trigger.key(), patterns = patterns.len(), "associations checked");
        }

        Ok(Self { catalog, triggers })
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn triggers(&self) -> &TriggerMap {
        &self.triggers
    }

    /// Query engine over this knowledge base.
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use program_rules::{BehaviorPattern, CoreNeed};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_load_standard() {
        let kb = KnowledgeBase::load().unwrap();
        assert_eq!(kb.catalog().len(), BehaviorPattern::ALL.len());
    }

    #[test]
    fn test_referential_integrity() {
        let kb = KnowledgeBase::load().unwrap();
        for trigger in TriggerType::ALL {
            for &pattern in kb.triggers().patterns_for(trigger) {
                assert!(kb.catalog().record_of(pattern).is_ok());
            }
        }
    }

    #[test]
    fn test_missing_gloss_fails_load() {
        let mut triggers = TriggerMap::new();
        for trigger in TriggerType::ALL {
            if trigger != TriggerType::Outshine {
                triggers = triggers.with_gloss(trigger, "gloss");
            }
        }

        let catalog = PatternCatalog::standard().unwrap();
        let err = KnowledgeBase::from_parts(catalog, triggers).unwrap_err();
        assert_eq!(err, RulesError::GlossNotFound(TriggerType::Outshine));
    }

    #[test]
    fn test_map_without_associations_is_valid() {
        let mut triggers = TriggerMap::new();
        for trigger in TriggerType::ALL {
            triggers = triggers.with_gloss(trigger, "gloss");
        }

        let kb = KnowledgeBase::from_parts(PatternCatalog::standard().unwrap(), triggers).unwrap();
        assert!(kb.triggers().patterns_for(TriggerType::Boundary).is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let kb = Arc::new(KnowledgeBase::load().unwrap());
        let expected: Vec<_> = kb
            .catalog()
            .records_by_need(CoreNeed::ControlSupply)
            .iter()
            .map(|r| r.pattern)
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let kb = Arc::clone(&kb);
                thread::spawn(move || {
                    kb.catalog()
                        .records_by_need(CoreNeed::ControlSupply)
                        .iter()
                        .map(|r| r.pattern)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
