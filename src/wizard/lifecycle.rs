//! Presentation lifecycle
//!
//! Owns the sequence, the navigation stack and the observable state, and
//! drives show / next / back / dismiss. The only deferred work is the second
//! phase of an animated dismissal, which runs from `poll()` on the caller's
//! own event loop.
//!
//! ```text
//!            show_popup                 dismiss_popup_with_animation
//!  Hidden ─────────────> Presenting ─────────────────────────> DismissingAnimated
//!    ^                    │  ^  │ next / back                        │
//!    │    dismiss_popup   │  └──┘                                    │ poll() after
//!    └────────────────────┘                                          │ the animation
//!    ^                                                               │
//!    └───────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::sequence::SequenceRegistry;
use super::stack::NavigationStack;
use super::state::{Phase, PresentationSnapshot, PresentationState};
use super::step::Step;
use super::transition::{transition_for, Animation, Direction, TransitionDescriptor};
use crate::config::AnimationConfig;
use crate::error::WizardError;
use crate::messaging::{EventBus, WizardCommand, WizardEvent};
use crate::scheduler::{Clock, Scheduler, SystemClock, TaskId};

pub struct PresentationLifecycle {
    registry: SequenceRegistry,
    stack: NavigationStack,
    state: PresentationState,
    animation: AnimationConfig,
    events: EventBus,
    clock: Arc<dyn Clock>,

    /// Pending dismissal commits, keyed by the token current when scheduled
    scheduler: Scheduler<u64>,

    /// Phase-2 commit of the animated dismissal in flight, if any
    pending_commit: Option<TaskId>,

    /// Bumped by every show and dismissal; a commit only applies if its
    /// token is still current
    dismissal_token: u64,
}

impl PresentationLifecycle {
    /// Create a lifecycle driven by the system clock
    pub fn new(animation: AnimationConfig) -> Self {
        Self::with_clock(animation, Arc::new(SystemClock))
    }

    /// Create a lifecycle driven by `clock`.
    ///
    /// An invalid `animation` is logged and replaced by the defaults.
    pub fn with_clock(animation: AnimationConfig, clock: Arc<dyn Clock>) -> Self {
        let animation = match animation.validate() {
            Ok(()) => animation,
            Err(e) => {
                warn!("{}, using default animation timing", e);
                AnimationConfig::default()
            }
        };

        Self {
            registry: SequenceRegistry::new(),
            stack: NavigationStack::new(),
            state: PresentationState {
                animation: Animation::standard(&animation),
                ..PresentationState::default()
            },
            animation,
            events: EventBus::new(),
            clock,
            scheduler: Scheduler::new(),
            pending_commit: None,
            dismissal_token: 0,
        }
    }

    /// Replace the step sequence and rewind the cursor.
    ///
    /// Refused while a wizard is presented or animating out.
    pub fn set_sequence(&mut self, steps: Vec<Step>) -> Result<(), WizardError> {
        let busy = match self.state.phase {
            Phase::Hidden => None,
            Phase::Presenting => Some("presented"),
            Phase::DismissingAnimated => Some("dismissing"),
        };
        if let Some(what) = busy {
            let err = WizardError::SequenceLocked(what);
            warn!("{}", err);
            self.reject(&err);
            return Err(err);
        }

        // Hidden always has an empty stack with the cursor at 0.
        self.registry.replace(steps);
        self.refresh_flags();

        debug!("Sequence set with {} steps", self.registry.len());
        self.events.publish(WizardEvent::SequenceReplaced {
            len: self.registry.len(),
        });
        self.publish_state();
        Ok(())
    }

    /// Present the first step of the sequence.
    ///
    /// With an empty sequence this logs, publishes a rejection and changes
    /// nothing. Calling it during an animated dismissal reopens the wizard
    /// and cancels the pending commit.
    pub fn show_popup(&mut self) -> Result<(), WizardError> {
        if !self.stack.reset_to_first(&self.registry) {
            let err = WizardError::EmptySequence;
            warn!("{}", err);
            self.reject(&err);
            return Err(err);
        }

        self.cancel_pending_commit();
        self.dismissal_token += 1;
        self.state.transition = TransitionDescriptor::entry();
        self.state.animation = Animation::standard(&self.animation);
        self.state.is_presented = true;
        self.state.phase = Phase::Presenting;
        self.refresh_flags();

        info!("Presented wizard ({} steps)", self.registry.len());
        self.events.publish(WizardEvent::Presented);
        self.publish_state();
        Ok(())
    }

    /// Push the next step, or finish the wizard if none remain
    pub fn navigate_next(&mut self) {
        if !self.state.phase.is_presenting() {
            debug!("Ignoring next while {}", self.state.phase.description());
            return;
        }

        if self.stack.push_next(&self.registry).is_none() {
            debug!("End of sequence reached");
            self.dismiss_popup();
            return;
        }

        self.navigated(Direction::Forward);
    }

    /// Pop the current step, or dismiss if it is the first one
    pub fn navigate_back(&mut self) {
        if !self.state.phase.is_presenting() {
            debug!("Ignoring back while {}", self.state.phase.description());
            return;
        }

        if self.stack.pop().is_none() {
            debug!("Back from first step");
            self.dismiss_popup();
            return;
        }

        self.navigated(Direction::Backward);
    }

    /// Hide the wizard and clear the stack immediately.
    ///
    /// A pending animated commit is cancelled, so it never clears twice.
    /// On an already hidden wizard this does nothing.
    pub fn dismiss_popup(&mut self) {
        if self.state.phase.is_hidden() {
            return;
        }

        self.cancel_pending_commit();
        self.dismissal_token += 1;
        self.commit_dismissal();
    }

    /// Hide the wizard now and clear the stack once the animation finishes.
    ///
    /// Only the first call of a dismissal schedules the commit; repeated
    /// calls while animating out are ignored.
    pub fn dismiss_popup_with_animation(&mut self) {
        match self.state.phase {
            Phase::Hidden => return,
            Phase::DismissingAnimated => {
                debug!("Dismissal #{} already in progress", self.dismissal_token);
                return;
            }
            Phase::Presenting => {}
        }

        self.dismissal_token += 1;
        let token = self.dismissal_token;

        self.state.is_presented = false;
        self.state.phase = Phase::DismissingAnimated;
        self.state.animation = Animation::dismissal(&self.animation);
        self.pending_commit = Some(self.scheduler.schedule(
            self.clock.now(),
            self.animation.duration(),
            token,
        ));

        debug!(
            "Dismissal #{} scheduled in {}ms",
            token, self.animation.duration_ms
        );
        self.events.publish(WizardEvent::DismissStarted { token });
        self.publish_state();
    }

    /// Run deferred work that is due. Returns the number of dismissals
    /// committed.
    pub fn poll(&mut self) -> usize {
        let mut committed = 0;

        for token in self.scheduler.take_due(self.clock.now()) {
            if token == self.dismissal_token && self.state.phase.is_transitioning() {
                self.pending_commit = None;
                self.commit_dismissal();
                committed += 1;
            } else {
                debug!("Ignoring stale dismissal #{}", token);
                self.events
                    .publish(WizardEvent::StaleDismissalIgnored { token });
            }
        }

        committed
    }

    /// Dispatch a caller command
    pub fn execute(&mut self, command: WizardCommand) -> Result<(), WizardError> {
        debug!("Executing command: {}", command.description());

        match command {
            WizardCommand::Show => return self.show_popup(),
            WizardCommand::Next => self.navigate_next(),
            WizardCommand::Back => self.navigate_back(),
            WizardCommand::Dismiss => self.dismiss_popup(),
            WizardCommand::DismissAnimated => self.dismiss_popup_with_animation(),
            WizardCommand::Quit => {}
        }
        Ok(())
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            state: self.state,
            presented_steps: self.stack.presented().to_vec(),
        }
    }

    pub fn presented_steps(&self) -> &[Step] {
        self.stack.presented()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.stack.top()
    }

    pub fn cursor(&self) -> usize {
        self.stack.cursor()
    }

    pub fn sequence_len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_presented(&self) -> bool {
        self.state.is_presented
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Timing the renderer must use for its own animations
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// When `poll()` next has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    fn navigated(&mut self, direction: Direction) {
        self.state.direction = direction;
        self.state.transition = transition_for(direction);
        self.state.animation = Animation::step(&self.animation);
        self.refresh_flags();

        let cursor = self.stack.cursor();
        debug!("Navigated {:?} to cursor {}", direction, cursor);
        self.events.publish(match direction {
            Direction::Forward => WizardEvent::NavigatedForward { cursor },
            Direction::Backward => WizardEvent::NavigatedBack { cursor },
        });
        self.publish_state();
    }

    fn cancel_pending_commit(&mut self) {
        if let Some(id) = self.pending_commit.take() {
            if self.scheduler.cancel(id) {
                debug!("Cancelled pending dismissal #{}", self.dismissal_token);
            }
        }
    }

    fn commit_dismissal(&mut self) {
        let removed = self.stack.clear();
        self.state.transition = TransitionDescriptor::fade();
        self.state.animation = Animation::standard(&self.animation);
        self.state.is_presented = false;
        self.state.phase = Phase::Hidden;
        self.refresh_flags();

        info!("Dismissed wizard ({} steps cleared)", removed);
        self.events.publish(WizardEvent::Dismissed);
        self.publish_state();
    }

    fn refresh_flags(&mut self) {
        self.state.is_first_in_stack = self.stack.is_first();
        self.state.is_last_in_stack = self.stack.is_last(&self.registry);
        self.state.cursor = self.stack.cursor();
        self.state.stack_len = self.stack.len();
    }

    fn reject(&self, err: &WizardError) {
        self.events.publish(WizardEvent::OperationRejected {
            reason: err.to_string(),
        });
    }

    fn publish_state(&self) {
        self.events.publish(WizardEvent::StateChanged(self.state));
    }
}

impl Default for PresentationLifecycle {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}
