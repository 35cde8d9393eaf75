//! Percent interpolation and phase travel, advanced once per frame.

use std::time::Duration;

use web_time::Instant;

use super::state::{AnimationMode, AnimationState};
use crate::options::{WaveConfig, WaveDirection};

/// Phase-speed multiplier applied while the percent is morphing.
pub const MORPH_PHASE_BOOST: f64 = 2.4;

/// Clamp an integer percent into [0, 100].
#[must_use]
pub fn clamp_percent(p: i32) -> f64 {
    f64::from(p.clamp(0, 100))
}

/// Drives the displayed percent toward its target and accumulates phase.
///
/// Each tick moves the percent by `(target - current) * delta`, where
/// `delta` is the elapsed fraction of the window recomputed every tick.
/// This is a fraction-of-remaining step that accelerates as `delta`
/// approaches 1; it is not a linear tween.
#[derive(Debug, Clone)]
pub struct PercentAnimator {
    state: AnimationState,
    duration: Duration,
    phase_shift: f64,
    direction: WaveDirection,
    /// Timestamp of the most recent tick.
    last_frame: Option<Instant>,
}

impl PercentAnimator {
    /// Animator at 0% using the timing and direction from `config`.
    #[must_use]
    pub fn new(config: &WaveConfig) -> Self {
        let duration =
            Duration::try_from_secs_f64(config.animation_duration.max(0.0))
                .unwrap_or(Duration::ZERO);
        Self {
            state: AnimationState::new(Instant::now()),
            duration,
            phase_shift: config.phase_shift,
            direction: config.direction,
            last_frame: None,
        }
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Accumulated phase in radians.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.state.phase
    }

    /// Length of each interpolation window.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether a percent interpolation is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.state.mode.is_idle()
    }

    /// Rounded percent for presentation.
    #[must_use]
    pub fn display_percent(&self) -> i32 {
        self.state.current_percent.round() as i32
    }

    /// Animate toward `p`, starting the window at the last frame timestamp.
    ///
    /// Before the first tick there is no frame timestamp and the wall clock
    /// is used instead.
    pub fn set_target(&mut self, p: i32) {
        let now = self.last_frame.unwrap_or_else(Instant::now);
        self.set_target_at(p, now);
    }

    /// Animate toward `p` with the window starting at `now`.
    ///
    /// `p` is clamped to [0, 100]. Re-requesting the current target is a
    /// no-op. Retargeting mid-animation restarts the window from the
    /// current, unconverged percent.
    pub fn set_target_at(&mut self, p: i32, now: Instant) {
        let value = clamp_percent(p);
        let s = &mut self.state;
        if value == s.target_percent {
            return;
        }

        s.target_percent = value;
        s.start_time = now;
        s.end_time = now.checked_add(self.duration).unwrap_or(now);

        if value > s.current_percent {
            s.mode = AnimationMode::Increasing;
        } else if value < s.current_percent {
            s.mode = AnimationMode::Decreasing;
        }

        log::debug!(
            "wave retarget {:.2} -> {value} ({:?})",
            s.current_percent,
            s.mode
        );
    }

    /// Advance one frame: always move the phase, then step the percent.
    pub fn tick(&mut self, now: Instant) {
        self.last_frame = Some(now);

        let shift = if self.state.mode.is_idle() {
            self.phase_shift
        } else {
            self.phase_shift * MORPH_PHASE_BOOST
        };
        self.state.phase += self.direction.phase_sign() * shift;

        if self.state.mode.is_idle() {
            return;
        }

        let delta = self.state.window_progress(now).unwrap_or(0.0);
        if delta <= 0.0 {
            self.finish();
            return;
        }

        let s = &mut self.state;
        s.current_percent += (s.target_percent - s.current_percent) * delta;

        let reached = match s.mode {
            AnimationMode::Increasing => s.current_percent >= s.target_percent,
            AnimationMode::Decreasing => s.current_percent <= s.target_percent,
            AnimationMode::Idle => false,
        };
        if reached {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.state.current_percent = self.state.target_percent;
        self.state.mode = AnimationMode::Idle;
        log::debug!("wave converged at {}", self.state.target_percent);
    }
}
