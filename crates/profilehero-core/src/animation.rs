//! Tween scheduler for the collapsed/expanded morph.
//!
//! A [`Tween`] moves a single progress value between `0.0` (collapsed) and
//! `1.0` (expanded). The UI samples it once per frame and feeds the result
//! into [`crate::layout`]. Time is passed in explicitly so the scheduler is
//! fully deterministic under test.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing curves available to transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map normalized time `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Duration and curve of one full collapsed-to-expanded transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(350),
            easing: Easing::EaseInOut,
        }
    }
}

/// A retargetable tween over a single `f32`.
///
/// Retargeting mid-flight starts from the currently sampled value, so the
/// output never jumps. The run time is scaled by the remaining distance:
/// reversing halfway through takes half of the configured duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Option<Instant>,
    run: Duration,
    config: TransitionConfig,
}

impl Tween {
    /// A tween at rest on `value`.
    pub fn settled(value: f32, config: TransitionConfig) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
            run: Duration::ZERO,
            config,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Value of the tween at `now`.
    pub fn sample(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        if self.run.is_zero() {
            return self.to;
        }

        let elapsed = now.saturating_duration_since(started);
        let t = elapsed.as_secs_f32() / self.run.as_secs_f32();
        if t >= 1.0 {
            self.to
        } else {
            let eased = self.config.easing.apply(t);
            self.from * (1.0 - eased) + self.to * eased
        }
    }

    /// Whether the tween has reached its target at `now`.
    pub fn is_settled(&self, now: Instant) -> bool {
        match self.started {
            None => true,
            Some(started) => now.saturating_duration_since(started) >= self.run,
        }
    }

    /// Jump to `value` and stop.
    pub fn reset(&mut self, value: f32) {
        *self = Self::settled(value, self.config);
    }

    /// Start moving towards `to` from wherever the tween is at `now`.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        let current = self.sample(now);
        let distance = (to - current).abs().min(1.0);

        self.from = current;
        self.to = to;
        self.started = Some(now);
        self.run = self.config.duration.mul_f32(distance);
    }
}

/// One sampled frame of the card animations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Morph progress, 0.0 = collapsed, 1.0 = expanded
    pub progress: f32,
    /// Picture opacity during the fade-in
    pub reveal: f32,
    /// Both tweens have reached their targets
    pub settled: bool,
}

/// The two tweens driving the profile card: the collapsed/expanded morph and
/// the fade-in of a newly committed picture.
#[derive(Debug, Clone, PartialEq)]
pub struct CardAnimator {
    morph: Tween,
    reveal: Tween,
}

impl CardAnimator {
    /// Collapsed, with any picture fully visible.
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            morph: Tween::settled(0.0, config),
            reveal: Tween::settled(1.0, config),
        }
    }

    /// Move the morph towards `progress` from wherever it is at `now`.
    pub fn animate_to(&mut self, progress: f32, now: Instant) {
        self.morph.retarget(progress, now);
    }

    /// Restart the fade-in from fully transparent.
    pub fn reveal(&mut self, now: Instant) {
        self.reveal.reset(0.0);
        self.reveal.retarget(1.0, now);
    }

    pub fn frame(&self, now: Instant) -> AnimationFrame {
        AnimationFrame {
            progress: self.morph.sample(now),
            reveal: self.reveal.sample(now),
            settled: self.morph.is_settled(now) && self.reveal.is_settled(now),
        }
    }
}
