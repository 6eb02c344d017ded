//! Navigation stack
//!
//! The steps currently presented (top = last = visible) plus a cursor to the
//! next step of the sequence that has not been pushed yet. Every push
//! advances the cursor and every pop rewinds it, so after any completed
//! operation `presented.len() == cursor`.

use super::sequence::SequenceRegistry;
use super::step::Step;

#[derive(Debug, Clone, Default)]
pub struct NavigationStack {
    presented: Vec<Step>,
    cursor: usize,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stack with the first step of `registry`.
    /// Returns false (and leaves the stack untouched) if the registry is empty.
    pub fn reset_to_first(&mut self, registry: &SequenceRegistry) -> bool {
        let Some(first) = registry.first() else {
            return false;
        };
        self.presented.clear();
        self.presented.push(first.clone());
        self.cursor = 1;
        true
    }

    /// Push the step at the cursor. `None` means the sequence is exhausted.
    pub fn push_next(&mut self, registry: &SequenceRegistry) -> Option<&Step> {
        let step = registry.get(self.cursor)?.clone();
        self.presented.push(step);
        self.cursor += 1;
        self.presented.last()
    }

    /// Pop the top step. `None` means only the first step (or nothing) is left.
    pub fn pop(&mut self) -> Option<Step> {
        if self.presented.len() <= 1 {
            return None;
        }
        self.cursor -= 1;
        self.presented.pop()
    }

    /// Drop every presented step and rewind the cursor.
    /// Returns the number of steps removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.presented.len();
        self.presented.clear();
        self.cursor = 0;
        removed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn presented(&self) -> &[Step] {
        &self.presented
    }

    pub fn top(&self) -> Option<&Step> {
        self.presented.last()
    }

    pub fn len(&self) -> usize {
        self.presented.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presented.is_empty()
    }

    /// True when the cursor is on (or before) the first step
    pub fn is_first(&self) -> bool {
        self.cursor <= 1
    }

    /// True when no step of `registry` remains to be pushed
    pub fn is_last(&self, registry: &SequenceRegistry) -> bool {
        self.cursor >= registry.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::step::RenderToken;

    fn registry(names: &[&'static str]) -> SequenceRegistry {
        let mut registry = SequenceRegistry::new();
        registry.replace(
            names
                .iter()
                .map(|n| Step::new(RenderToken::new(*n)))
                .collect(),
        );
        registry
    }

    fn top_name(stack: &NavigationStack) -> Option<&'static str> {
        stack
            .top()
            .and_then(|s| s.content().downcast_ref::<&'static str>())
            .copied()
    }

    #[test]
    fn test_reset_to_first() {
        let reg = registry(&["S1", "S2"]);
        let mut stack = NavigationStack::new();

        assert!(stack.reset_to_first(&reg));
        assert_eq!(stack.cursor(), 1);
        assert_eq!(stack.len(), 1);
        assert_eq!(top_name(&stack), Some("S1"));
    }

    #[test]
    fn test_reset_to_first_empty_registry() {
        let mut stack = NavigationStack::new();
        assert!(!stack.reset_to_first(&SequenceRegistry::new()));
        assert!(stack.is_empty());
        assert_eq!(stack.cursor(), 0);
    }

    #[test]
    fn test_reset_with_empty_registry_keeps_stack() {
        let reg = registry(&["S1", "S2"]);
        let mut stack = NavigationStack::new();
        stack.reset_to_first(&reg);
        stack.push_next(&reg);

        assert!(!stack.reset_to_first(&SequenceRegistry::new()));
        assert_eq!(stack.len(), 2);
        assert_eq!(top_name(&stack), Some("S2"));
    }

    #[test]
    fn test_push_until_exhausted() {
        let reg = registry(&["S1", "S2"]);
        let mut stack = NavigationStack::new();
        stack.reset_to_first(&reg);

        assert!(stack.push_next(&reg).is_some());
        assert_eq!(stack.cursor(), 2);
        assert_eq!(top_name(&stack), Some("S2"));
        assert!(stack.is_last(&reg));

        assert!(stack.push_next(&reg).is_none());
        assert_eq!(stack.cursor(), 2);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_stops_at_first_step() {
        let reg = registry(&["S1", "S2", "S3"]);
        let mut stack = NavigationStack::new();
        stack.reset_to_first(&reg);
        stack.push_next(&reg);

        assert!(stack.pop().is_some());
        assert_eq!(stack.cursor(), 1);
        assert!(stack.is_first());

        assert!(stack.pop().is_none());
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.cursor(), 1);
    }

    #[test]
    fn test_clear_reports_removed_steps() {
        let reg = registry(&["S1", "S2"]);
        let mut stack = NavigationStack::new();
        assert_eq!(stack.clear(), 0);

        stack.reset_to_first(&reg);
        stack.push_next(&reg);
        assert_eq!(stack.clear(), 2);
        assert!(stack.is_empty());
        assert_eq!(stack.cursor(), 0);
        assert!(stack.is_first());
        assert!(!stack.is_last(&reg));
    }

    #[test]
    fn test_len_tracks_cursor() {
        let reg = registry(&["S1", "S2", "S3", "S4"]);
        let mut stack = NavigationStack::new();
        stack.reset_to_first(&reg);

        for _ in 0..3 {
            stack.push_next(&reg);
            assert_eq!(stack.len(), stack.cursor());
        }
        while stack.pop().is_some() {
            assert_eq!(stack.len(), stack.cursor());
        }
    }
}
