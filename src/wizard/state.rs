//! Presentation state
//!
//! Everything a renderer observes. Only the lifecycle mutates it.

use serde::{Deserialize, Serialize};

use super::step::Step;
use super::transition::{Animation, Direction, TransitionDescriptor};

/// Lifecycle phase of the wizard overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing presented, stack empty
    #[default]
    Hidden,

    /// Overlay visible with at least one step
    Presenting,

    /// Overlay animating out; steps still on the stack (transitional state)
    DismissingAnimated,
}

impl Phase {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Phase::Hidden)
    }

    pub fn is_presenting(&self) -> bool {
        matches!(self, Phase::Presenting)
    }

    /// Check if the overlay is in a transitional state
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Phase::DismissingAnimated)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Hidden => "Hidden",
            Phase::Presenting => "Presenting",
            Phase::DismissingAnimated => "Dismissing...",
        }
    }
}

/// Observable presentation flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationState {
    pub phase: Phase,
    pub is_presented: bool,
    pub direction: Direction,
    pub transition: TransitionDescriptor,
    pub animation: Animation,
    pub is_first_in_stack: bool,
    pub is_last_in_stack: bool,
    pub cursor: usize,
    pub stack_len: usize,
}

impl PresentationState {
    /// Overlay must stay mounted while presented or while content remains
    /// on the stack during the animated dismissal
    pub fn overlay_visible(&self) -> bool {
        self.is_presented || self.stack_len > 0
    }

    /// The overlay only takes input while presented
    pub fn accepts_input(&self) -> bool {
        self.is_presented
    }
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            phase: Phase::Hidden,
            is_presented: false,
            direction: Direction::Forward,
            transition: TransitionDescriptor::identity(),
            animation: Animation::default(),
            is_first_in_stack: true,
            is_last_in_stack: true,
            cursor: 0,
            stack_len: 0,
        }
    }
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone)]
pub struct PresentationSnapshot {
    pub state: PresentationState,
    pub presented_steps: Vec<Step>,
}

impl PresentationSnapshot {
    /// Step currently on top of the stack
    pub fn current_step(&self) -> Option<&Step> {
        self.presented_steps.last()
    }
}
