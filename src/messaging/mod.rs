//! Messaging module for Event/Command architecture
//!
//! - **Commands**: requests from the caller (show, next, back, dismiss)
//! - **Events**: notifications the lifecycle broadcasts after acting
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   Command   ┌──────────────────────┐   Event   ┌───────────┐
//! │  Caller  │ ──────────> │ PresentationLifecycle│ ────────> │ Event Bus │
//! │ (footer, │             │                      │           │           │
//! │  drag)   │             └──────────────────────┘           └───────────┘
//! └──────────┘                                                      │
//!                                                                   ▼
//!                                                             ┌──────────┐
//!                                                             │ Renderer │
//!                                                             └──────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut wizard = PresentationLifecycle::new(AnimationConfig::default());
//! let (rx, _id) = wizard.events().subscribe();
//!
//! wizard.execute(WizardCommand::Show);
//!
//! while let Ok(event) = rx.try_recv() {
//!     if let WizardEvent::StateChanged(state) = event {
//!         // re-render from `state` and `wizard.snapshot()`
//!     }
//! }
//! ```

pub mod bus;
pub mod commands;
pub mod events;

pub use bus::{EventBus, SubscriberId};
pub use commands::WizardCommand;
pub use events::WizardEvent;
