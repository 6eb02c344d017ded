pub mod config;
pub mod error;
pub mod messaging;
pub mod scheduler;
pub mod wizard;

pub use config::{AnimationConfig, WizardConfig};
pub use error::{AppResult, ConfigError, WizardError};
pub use messaging::{EventBus, SubscriberId, WizardCommand, WizardEvent};
pub use scheduler::{Clock, ManualClock, Scheduler, SystemClock, TaskId};
pub use wizard::{
    Direction, Phase, PresentationLifecycle, PresentationSnapshot, PresentationState,
    RenderToken, Step, TransitionDescriptor,
};
