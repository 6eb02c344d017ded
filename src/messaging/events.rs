//! Event types for the wizard
//!
//! Events represent things that have happened (past tense).
//! They are broadcast to all subscribers.

use crate::wizard::state::PresentationState;

/// Wizard events
#[derive(Debug, Clone)]
pub enum WizardEvent {
    /// A new sequence was registered
    SequenceReplaced { len: usize },

    /// The overlay was presented with the first step
    Presented,

    /// A step was pushed
    NavigatedForward { cursor: usize },

    /// A step was popped
    NavigatedBack { cursor: usize },

    /// Animated dismissal started; commit is pending for `token`
    DismissStarted { token: u64 },

    /// The stack was cleared and the overlay is hidden
    Dismissed,

    /// A deferred commit fired for a dismissal that is no longer current
    StaleDismissalIgnored { token: u64 },

    /// An operation was refused and left the state untouched
    OperationRejected { reason: String },

    /// Observable state after an effective mutation
    StateChanged(PresentationState),
}

impl WizardEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            WizardEvent::SequenceReplaced { len } => format!("Sequence replaced: {} steps", len),
            WizardEvent::Presented => "Wizard presented".to_string(),
            WizardEvent::NavigatedForward { cursor } => format!("Next step (cursor {})", cursor),
            WizardEvent::NavigatedBack { cursor } => format!("Previous step (cursor {})", cursor),
            WizardEvent::DismissStarted { token } => format!("Dismissal #{} started", token),
            WizardEvent::Dismissed => "Wizard dismissed".to_string(),
            WizardEvent::StaleDismissalIgnored { token } => {
                format!("Stale dismissal #{} ignored", token)
            }
            WizardEvent::OperationRejected { reason } => format!("Rejected: {}", reason),
            WizardEvent::StateChanged(state) => {
                format!("State: {} (cursor {})", state.phase.description(), state.cursor)
            }
        }
    }
}
