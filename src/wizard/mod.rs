//! Popup wizard navigation core
//!
//! Turns a flat list of steps into a presentation stack with direction-aware
//! transitions, first/last bookkeeping and a two-phase animated dismissal.
//!
//! ## Architecture
//!
//! ```text
//! PresentationLifecycle
//!   ├── SequenceRegistry (ordered steps, replaced wholesale)
//!   ├── NavigationStack (presented steps + cursor)
//!   ├── PresentationState (flags, direction, transition, animation)
//!   ├── transition_for (direction -> TransitionDescriptor)
//!   └── Scheduler (deferred dismissal commit)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use popup_wizard::wizard::{PresentationLifecycle, RenderToken, Step};
//!
//! let mut wizard = PresentationLifecycle::default();
//! wizard.set_sequence(vec![
//!     Step::new(RenderToken::new("Welcome")).with_footer(RenderToken::new("Next")),
//!     Step::new(RenderToken::new("Done")),
//! ])?;
//!
//! wizard.show_popup()?;
//! wizard.navigate_next();
//! wizard.navigate_next(); // past the end: dismisses
//!
//! // From the event loop:
//! wizard.poll();
//! ```
//!
//! ## Phases
//!
//! 1. **Hidden** - stack empty, nothing presented
//! 2. **Presenting** - overlay visible, top of stack is the current step
//! 3. **DismissingAnimated** - overlay animating out, stack cleared by `poll()`

pub mod lifecycle;
pub mod sequence;
pub mod stack;
pub mod state;
pub mod step;
pub mod transition;

pub use lifecycle::PresentationLifecycle;
pub use sequence::SequenceRegistry;
pub use stack::NavigationStack;
pub use state::{Phase, PresentationSnapshot, PresentationState};
pub use step::{RenderToken, Step};
pub use transition::{
    transition_for, Animation, AnimationCurve, Direction, Edge, TransitionDescriptor,
    TransitionEffect,
};
