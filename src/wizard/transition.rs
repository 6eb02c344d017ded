//! Transition and animation descriptors
//!
//! Pure data handed to the renderer. Step-to-step transitions slide in the
//! direction of travel and always carry the fade+blur combination; only the
//! slide edge depends on direction.

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;

/// Blur radius a view starts from on insertion and ends at on removal
pub const BLUR_RADIUS: f32 = 6.0;

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Horizontal edge a view slides from or to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Leading,
    Trailing,
}

/// Effect applied to one side (insertion or removal) of a transition.
///
/// For insertion the view animates *from* these values to rest; for removal
/// it animates from rest *to* them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionEffect {
    /// Slide edge, if the view moves
    pub slide: Option<Edge>,

    /// Whether opacity animates against 0
    pub opacity: bool,

    /// Blur radius animated against 0, if any
    pub blur_radius: Option<f32>,
}

impl TransitionEffect {
    /// No effect at all
    pub fn none() -> Self {
        Self {
            slide: None,
            opacity: false,
            blur_radius: None,
        }
    }

    /// Opacity fade only
    pub fn fade() -> Self {
        Self::none().with_opacity()
    }

    /// The fixed fade+blur combination
    pub fn fade_blur() -> Self {
        Self::fade().with_blur(BLUR_RADIUS)
    }

    pub fn with_slide(mut self, edge: Edge) -> Self {
        self.slide = Some(edge);
        self
    }

    pub fn with_opacity(mut self) -> Self {
        self.opacity = true;
        self
    }

    pub fn with_blur(mut self, radius: f32) -> Self {
        self.blur_radius = Some(radius);
        self
    }
}

/// Insertion/removal pair describing how views enter and leave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    pub insertion: TransitionEffect,
    pub removal: TransitionEffect,
}

impl TransitionDescriptor {
    fn symmetric(effect: TransitionEffect) -> Self {
        Self {
            insertion: effect,
            removal: effect,
        }
    }

    /// No visible transition (the state before anything was presented)
    pub fn identity() -> Self {
        Self::symmetric(TransitionEffect::none())
    }

    /// Plain fade, used after dismissal
    pub fn fade() -> Self {
        Self::symmetric(TransitionEffect::fade())
    }

    /// Entry transition for the overlay itself: fade+blur, no slide
    pub fn entry() -> Self {
        Self::symmetric(TransitionEffect::fade_blur())
    }

    /// Step-to-step transition for a navigation direction
    pub fn for_direction(direction: Direction) -> Self {
        let (enter, exit) = match direction {
            Direction::Forward => (Edge::Trailing, Edge::Leading),
            Direction::Backward => (Edge::Leading, Edge::Trailing),
        };

        Self {
            insertion: TransitionEffect::fade_blur().with_slide(enter),
            removal: TransitionEffect::fade_blur().with_slide(exit),
        }
    }
}

impl Default for TransitionDescriptor {
    fn default() -> Self {
        Self::identity()
    }
}

/// Map a navigation direction to its transition
pub fn transition_for(direction: Direction) -> TransitionDescriptor {
    TransitionDescriptor::for_direction(direction)
}

/// Timing curve the renderer should animate with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationCurve {
    /// Quick spring-like settle, used for presentation and navigation
    Snappy,
    /// Symmetric ease, used for the animated dismissal
    EaseInOut,
}

/// Animation the renderer should apply to the latest state change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub curve: AnimationCurve,
    pub duration_ms: u64,
    pub speed: f64,
}

impl Animation {
    /// Presentation and immediate dismissal
    pub fn standard(config: &AnimationConfig) -> Self {
        Self {
            curve: AnimationCurve::Snappy,
            duration_ms: config.duration_ms,
            speed: 1.0,
        }
    }

    /// Step-to-step navigation, slowed by the configured step speed
    pub fn step(config: &AnimationConfig) -> Self {
        Self {
            speed: config.step_speed,
            ..Self::standard(config)
        }
    }

    /// First phase of an animated dismissal
    pub fn dismissal(config: &AnimationConfig) -> Self {
        Self {
            curve: AnimationCurve::EaseInOut,
            duration_ms: config.duration_ms,
            speed: 1.0,
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::standard(&AnimationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_slides_in_from_trailing() {
        let t = transition_for(Direction::Forward);
        assert_eq!(t.insertion.slide, Some(Edge::Trailing));
        assert_eq!(t.removal.slide, Some(Edge::Leading));
    }

    #[test]
    fn test_backward_slides_in_from_leading() {
        let t = transition_for(Direction::Backward);
        assert_eq!(t.insertion.slide, Some(Edge::Leading));
        assert_eq!(t.removal.slide, Some(Edge::Trailing));
    }

    #[test]
    fn test_fade_blur_identical_in_both_directions() {
        let fwd = transition_for(Direction::Forward);
        let back = transition_for(Direction::Backward);

        for effect in [fwd.insertion, fwd.removal, back.insertion, back.removal] {
            assert!(effect.opacity);
            assert_eq!(effect.blur_radius, Some(BLUR_RADIUS));
        }
    }

    #[test]
    fn test_entry_has_no_slide() {
        let t = TransitionDescriptor::entry();
        assert_eq!(t.insertion, TransitionEffect::fade_blur());
        assert!(t.insertion.slide.is_none());
        assert_eq!(t.insertion, t.removal);
    }

    #[test]
    fn test_fade_and_identity() {
        let fade = TransitionDescriptor::fade();
        assert!(fade.insertion.opacity);
        assert!(fade.insertion.blur_radius.is_none());

        let identity = TransitionDescriptor::default();
        assert_eq!(identity.insertion, TransitionEffect::none());
        assert_eq!(identity.removal, TransitionEffect::none());
    }

    #[test]
    fn test_step_animation_speed() {
        let config = AnimationConfig::new(280);
        let step = Animation::step(&config);
        assert_eq!(step.curve, AnimationCurve::Snappy);
        assert_eq!(step.speed, 0.9);
        assert_eq!(step.duration_ms, 280);

        let dismissal = Animation::dismissal(&config);
        assert_eq!(dismissal.curve, AnimationCurve::EaseInOut);
        assert_eq!(dismissal.duration_ms, 280);
        assert_eq!(dismissal.speed, 1.0);
    }

    #[test]
    fn test_direction_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Direction::Backward).unwrap(),
            "\"backward\""
        );
    }
}
