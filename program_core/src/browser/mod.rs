//! Card Browser - pages through the records for one selected trigger.
//!
//! This is the headless half of a presentation layer: it holds the selection
//! and the page position, and leaves drawing to whoever owns the screen.

use program_rules::{PatternRecord, RulesResult, TriggerType};
use tracing::debug;

use crate::knowledge_base::KnowledgeBase;

/// Page label shown before anything is selected.
pub const EMPTY_PAGE_LABEL: &str = "Select a trigger to begin";

/// Card area text shown before anything is selected.
pub const PLACEHOLDER_TEXT: &str =
    "Choose any trigger and the matching behavior pattern cards appear here; page through them \
     with next and previous.";

/// Selection and page state over a trigger's cards.
///
/// Records are borrowed from the knowledge base, never copied or mutated.
#[derive(Debug, Clone)]
pub struct CardBrowser<'kb> {
    kb: &'kb KnowledgeBase,
    selected: Option<TriggerType>,
    cards: Vec<&'kb PatternRecord>,
    index: usize,
}

impl<'kb> CardBrowser<'kb> {
    /// Create a browser with nothing selected.
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self {
            kb,
            selected: None,
            cards: Vec::new(),
            index: 0,
        }
    }

    /// Select a trigger and show its first card.
    pub fn select(&mut self, trigger: TriggerType) -> RulesResult<()> {
        let cards = self.kb.query().cards_for_trigger(trigger)?;
        debug!(trigger = trigger.key(), cards = cards.len(), "trigger selected");

        self.selected = Some(trigger);
        self.cards = cards;
        self.index = 0;
        Ok(())
    }

    /// Drop the selection and return to the placeholder state.
    pub fn clear(&mut self) {
        self.selected = None;
        self.cards.clear();
        self.index = 0;
    }

    /// Advance one card, wrapping past the end.
    pub fn next(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + 1) % self.cards.len();
        }
    }

    /// Go back one card, wrapping past the start.
    pub fn previous(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + self.cards.len() - 1) % self.cards.len();
        }
    }

    /// Jump to a 0-based position, wrapping if it is past the end.
    pub fn go_to(&mut self, position: usize) {
        if !self.cards.is_empty() {
            self.index = position % self.cards.len();
        }
    }

    pub fn selected(&self) -> Option<TriggerType> {
        self.selected
    }

    pub fn current(&self) -> Option<&'kb PatternRecord> {
        self.cards.get(self.index).copied()
    }

    /// 0-based position of the current card.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Paging controls are enabled only with more than one card.
    pub fn can_page(&self) -> bool {
        self.cards.len() > 1
    }

    pub fn page_label(&self) -> String {
        if self.cards.is_empty() {
            EMPTY_PAGE_LABEL.to_string()
        } else {
            format!("Card {} / {}", self.index + 1, self.cards.len())
        }
    }

    /// Text for the card area: the current card, or the placeholder.
    pub fn display_text(&self) -> String {
        self.current()
            .map(|card| card.card_text())
            .unwrap_or_else(|| PLACEHOLDER_TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use program_rules::{BehaviorPattern, PatternCatalog, TriggerMap};

    #[test]
    fn test_default_state() {
        let kb = KnowledgeBase::load().unwrap();
        let browser = CardBrowser::new(&kb);

        assert!(browser.is_empty());
        assert!(browser.selected().is_none());
        assert!(browser.current().is_none());
        assert!(!browser.can_page());
        assert_eq!(browser.page_label(), EMPTY_PAGE_LABEL);
        assert_eq!(browser.display_text(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_select_and_wrap_forward() {
        let kb = KnowledgeBase::load().unwrap();
        let mut browser = CardBrowser::new(&kb);
        browser.select(TriggerType::Criticism).unwrap();

        assert_eq!(browser.len(), 4);
        assert!(browser.can_page());
        assert_eq!(browser.page_label(), "Card 1 / 4");
        assert_eq!(browser.current().unwrap().pattern, BehaviorPattern::Darvo);

        for _ in 0..4 {
            browser.next();
        }
        assert_eq!(browser.position(), 0);
        assert_eq!(browser.current().unwrap().pattern, BehaviorPattern::Darvo);
    }

    #[test]
    fn test_wrap_backward() {
        let kb = KnowledgeBase::load().unwrap();
        let mut browser = CardBrowser::new(&kb);
        browser.select(TriggerType::Ignored).unwrap();

        browser.previous();
        assert_eq!(browser.page_label(), "Card 3 / 3");
        assert_eq!(browser.current().unwrap().pattern, BehaviorPattern::Triangulation);

        browser.previous();
        assert_eq!(browser.current().unwrap().pattern, BehaviorPattern::PassiveAggression);
    }

    #[test]
    fn test_go_to_wraps() {
        let kb = KnowledgeBase::load().unwrap();
        let mut browser = CardBrowser::new(&kb);
        browser.select(TriggerType::Boundary).unwrap();

        browser.go_to(5);
        assert_eq!(browser.position(), 1);
        assert_eq!(browser.current().unwrap().pattern, BehaviorPattern::Punishment);
    }

    #[test]
    fn test_reselect_resets_position() {
        let kb = KnowledgeBase::load().unwrap();
        let mut browser = CardBrowser::new(&kb);
        browser.select(TriggerType::Boundary).unwrap();
        browser.next();
        browser.next();

        browser.select(TriggerType::Outshine).unwrap();
        assert_eq!(browser.position(), 0);
        assert_eq!(browser.selected(), Some(TriggerType::Outshine));
        assert_eq!(browser.current().unwrap().pattern, BehaviorPattern::Devaluation);

        browser.clear();
        assert!(browser.is_empty());
        assert!(browser.selected().is_none());
    }

    #[test]
    fn test_paging_on_empty_and_single_decks() {
        let mut triggers =
            TriggerMap::new().with_patterns(TriggerType::Ignored, [BehaviorPattern::PlayVictim]);
        for trigger in TriggerType::ALL {
            triggers = triggers.with_gloss(trigger, "gloss");
        }
        let kb = KnowledgeBase::from_parts(PatternCatalog::standard().unwrap(), triggers).unwrap();
        let mut browser = CardBrowser::new(&kb);

        browser.select(TriggerType::Boundary).unwrap();
        assert!(browser.is_empty());
        assert!(!browser.can_page());
        browser.next();
        browser.previous();
        assert_eq!(browser.display_text(), PLACEHOLDER_TEXT);

        browser.select(TriggerType::Ignored).unwrap();
        assert_eq!(browser.len(), 1);
        assert!(!browser.can_page());
        browser.next();
        assert_eq!(browser.page_label(), "Card 1 / 1");
        assert!(browser.display_text().starts_with("[Play Victim]\n\nExpression:\n"));
    }
}
