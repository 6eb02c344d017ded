//! Command types for the wizard
//!
//! Commands represent requests to perform actions (imperative).
//! They are dispatched by `PresentationLifecycle::execute`.

use std::str::FromStr;

use crate::error::WizardError;

/// Wizard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardCommand {
    /// Present the first step
    Show,

    /// Push the next step, finishing the wizard at the end
    Next,

    /// Pop the current step, dismissing from the first one
    Back,

    /// Dismiss immediately
    Dismiss,

    /// Dismiss with the two-phase animation
    DismissAnimated,

    /// Stop the event loop
    Quit,
}

impl WizardCommand {
    /// Get a human-readable description of the command
    pub fn description(&self) -> &'static str {
        match self {
            WizardCommand::Show => "Show wizard",
            WizardCommand::Next => "Next step",
            WizardCommand::Back => "Previous step",
            WizardCommand::Dismiss => "Dismiss",
            WizardCommand::DismissAnimated => "Dismiss with animation",
            WizardCommand::Quit => "Quit",
        }
    }
}

impl FromStr for WizardCommand {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "show" | "s" => Ok(WizardCommand::Show),
            "next" | "n" => Ok(WizardCommand::Next),
            "back" | "b" => Ok(WizardCommand::Back),
            "dismiss" | "d" => Ok(WizardCommand::Dismiss),
            "animate" | "a" => Ok(WizardCommand::DismissAnimated),
            "quit" | "q" | "exit" => Ok(WizardCommand::Quit),
            other => Err(WizardError::UnknownCommand(other.to_string())),
        }
    }
}
