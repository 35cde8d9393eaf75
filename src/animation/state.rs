use web_time::Instant;

/// Which way the displayed percent is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    /// Moving up toward a larger target.
    Increasing,
    /// Moving down toward a smaller target.
    Decreasing,
    /// Converged; only the phase advances.
    #[default]
    Idle,
}

impl AnimationMode {
    /// Whether no percent interpolation is in progress.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Mutable animation state owned by the wave component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Percent currently drawn, in [0, 100].
    pub current_percent: f64,
    /// Percent being animated toward, in [0, 100].
    pub target_percent: f64,
    /// Accumulated horizontal phase in radians. Unbounded.
    pub phase: f64,
    /// Interpolation direction, or `Idle` once converged.
    pub mode: AnimationMode,
    /// Start of the current interpolation window.
    pub start_time: Instant,
    /// End of the current interpolation window.
    pub end_time: Instant,
}

impl AnimationState {
    /// Converged state at 0% with both window bounds at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            current_percent: 0.0,
            target_percent: 0.0,
            phase: 0.0,
            mode: AnimationMode::Idle,
            start_time: now,
            end_time: now,
        }
    }

    /// Linear progress through the window at `now`.
    ///
    /// Returns `None` when the window is empty, so callers never divide by
    /// zero. A `now` before the window start yields `Some(0.0)`.
    #[must_use]
    pub fn window_progress(&self, now: Instant) -> Option<f64> {
        let window = self
            .end_time
            .saturating_duration_since(self.start_time)
            .as_secs_f64();
        if window <= 0.0 {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        Some(elapsed.as_secs_f64() / window)
    }
}
