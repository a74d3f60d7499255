//! Pattern Catalog - the authoritative record for every behavior pattern.

mod records;

pub use records::standard_records;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{RulesError, RulesResult};
use crate::vocabulary::{BehaviorPattern, CoreNeed};

/// The description of one behavior pattern: what it serves, how it shows up,
/// and how to reframe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub pattern: BehaviorPattern,

    /// The single core need this pattern serves.
    pub serves_need: CoreNeed,

    /// Typical expression of the pattern.
    pub description: String,

    /// Healing or reframing note.
    pub healing_note: String,
}

impl PatternRecord {
    /// Create a new pattern record.
    pub fn new(
        pattern: BehaviorPattern,
        serves_need: CoreNeed,
        description: impl Into<String>,
        healing_note: impl Into<String>,
    ) -> Self {
        Self {
            pattern,
            serves_need,
            description: description.into(),
            healing_note: healing_note.into(),
        }
    }

    /// Compact block used by listings.
    pub fn summary_block(&self) -> String {
        format!(
            "[{}]\n  Expression: {}\n  Healing note: {}",
            self.pattern.label(),
            self.description,
            self.healing_note
        )
    }

    /// Full card text, one card shown at a time.
    pub fn card_text(&self) -> String {
        format!(
            "[{}]\n\nExpression:\n{}\n\nHealing note:\n{}",
            self.pattern.label(),
            self.description,
            self.healing_note
        )
    }
}

/// Immutable catalog holding exactly one record per behavior pattern.
///
/// Records are kept in canonical `BehaviorPattern` order, independent of the
/// order they were supplied in.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    records: Vec<PatternRecord>,

    /// Index: pattern -> position in `records`.
    index: HashMap<BehaviorPattern, usize>,
}

impl PatternCatalog {
    /// Build a catalog, rejecting duplicates and omissions.
    pub fn from_records(records: impl IntoIterator<Item = PatternRecord>) -> RulesResult<Self> {
        let mut by_pattern: HashMap<BehaviorPattern, PatternRecord> = HashMap::new();

        for record in records {
            let pattern = record.pattern;
            if by_pattern.insert(pattern, record).is_some() {
                return Err(RulesError::DuplicateRecord(pattern));
            }
        }

        let mut ordered = Vec::with_capacity(BehaviorPattern::ALL.len());
        for pattern in BehaviorPattern::ALL {
            let record = by_pattern
                .remove(&pattern)
                .ok_or(RulesError::MissingRecord(pattern))?;
            ordered.push(record);
        }

        let index = ordered
            .iter()
            .enumerate()
            .map(|(i, record)| (record.pattern, i))
            .collect();

        Ok(Self {
            records: ordered,
            index,
        })
    }

    /// The curated catalog.
    pub fn standard() -> RulesResult<Self> {
        Self::from_records(standard_records())
    }

    /// All records in canonical order.
    pub fn all_records(&self) -> &[PatternRecord] {
        &self.records
    }

    /// Records serving `need`, in catalog order. Empty if none match.
    pub fn records_by_need(&self, need: CoreNeed) -> Vec<&PatternRecord> {
        self.records
            .iter()
            .filter(|r| r.serves_need == need)
            .collect()
    }

    /// Exact lookup by pattern.
    pub fn record_of(&self, pattern: BehaviorPattern) -> RulesResult<&PatternRecord> {
        self.index
            .get(&pattern)
            .and_then(|&i| self.records.get(i))
            .ok_or(RulesError::PatternNotFound(pattern))
    }

    /// Check if a pattern has a record.
    pub fn contains(&self, pattern: BehaviorPattern) -> bool {
        self.index.contains_key(&pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
