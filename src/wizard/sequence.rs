//! Ordered list of steps defining one wizard flow

use super::step::Step;

#[derive(Debug, Clone, Default)]
pub struct SequenceRegistry {
    steps: Vec<Step>,
}

impl SequenceRegistry {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Replace the whole sequence
    pub fn replace(&mut self, steps: Vec<Step>) {
        self.steps = steps;
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
