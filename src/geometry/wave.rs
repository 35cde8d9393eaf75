//! Sampled sine/cosine wave under a parabolic envelope.
//!
//! The wave oscillates around a baseline that rises as the percent grows:
//! 0% sits on the bottom edge, 100% on the top edge. The envelope tapers the
//! oscillation to nothing at the left and right edges.

use std::f64::consts::TAU;

use glam::DVec2;

use super::path::WavePath;
use crate::animation::AnimationState;
use crate::options::{WaveConfig, WaveDirection};

/// Upper bound on wave samples per path.
pub const MAX_SAMPLES: usize = 1 << 16;

/// Vertical offset of the wave centerline for `percent` in a view of
/// `height`.
#[must_use]
pub fn baseline(height: f64, percent: f64) -> f64 {
    height * (100.0 - percent) / 100.0
}

/// Downward parabola: 1 at `mid_x`, 0 at `x = 0` and `x = 2 * mid_x`.
#[must_use]
pub fn envelope(x: f64, mid_x: f64) -> f64 {
    let u = (x - mid_x) / mid_x;
    -(u * u) + 1.0
}

/// Peak oscillation in pixels, floored at twice the line width so the wave
/// stays visible in short views.
#[must_use]
pub fn max_amplitude(height: f64, line_width: f64) -> f64 {
    (height / 2.0 / 10.0 - 4.0).max(2.0 * line_width)
}

/// Waveform value at angle `fx`: `sin` travelling left, `cos` right.
#[must_use]
pub fn waveform(direction: WaveDirection, fx: f64) -> f64 {
    match direction {
        WaveDirection::Left => fx.sin(),
        WaveDirection::Right => fx.cos(),
    }
}

/// Build the fill region for one frame.
///
/// Samples run from `x = 0` while `x < width + density`, so the last sample
/// may land past the right edge. The samples are joined with straight
/// segments and closed along the bottom of the view.
///
/// Non-positive or non-finite `width`, `height` or `mid_x` produce an empty
/// path. A non-positive `density` produces a single sample plus the corners.
/// At most [`MAX_SAMPLES`] samples are taken.
#[must_use]
pub fn generate(
    width: f64,
    height: f64,
    mid_x: f64,
    state: &AnimationState,
    config: &WaveConfig,
) -> WavePath {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !(usable(width) && usable(height) && usable(mid_x)) {
        return WavePath::empty();
    }

    let density = config.density;
    let amplitude = max_amplitude(height, config.line_width) * config.amplitude;
    let base = baseline(height, state.current_percent);

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let capacity = if density > 0.0 {
        ((width + density) / density)
            .ceil()
            .min(MAX_SAMPLES as f64) as usize
    } else {
        1
    };
    let mut samples = Vec::with_capacity(capacity);

    let mut x = 0.0;
    while x < width + density && samples.len() < MAX_SAMPLES {
        let fx = TAU * (x / width) * config.frequency + state.phase;
        let f = waveform(config.direction, fx);
        let y = envelope(x, mid_x) * amplitude * f + base;
        samples.push(DVec2::new(x, y));
        if density <= 0.0 {
            break;
        }
        x += density;
    }

    WavePath::closed_over(samples, width, height)
}

#[cfg(test)]
mod tests {
    use web_time::Instant;

    use super::*;

    fn state_at(percent: f64, phase: f64) -> AnimationState {
        let mut state = AnimationState::new(Instant::now());
        state.current_percent = percent;
        state.target_percent = percent;
        state.phase = phase;
        state
    }

    #[test]
    fn baseline_spans_full_height() {
        assert_eq!(baseline(200.0, 0.0), 200.0);
        assert_eq!(baseline(200.0, 100.0), 0.0);
        assert_eq!(baseline(200.0, 50.0), 100.0);
        assert_eq!(baseline(137.0, 0.0), 137.0);
    }

    #[test]
    fn envelope_is_one_at_center_zero_at_edges() {
        assert_eq!(envelope(50.0, 50.0), 1.0);
        assert_eq!(envelope(0.0, 50.0), 0.0);
        assert_eq!(envelope(100.0, 50.0), 0.0);
        assert!(envelope(105.0, 50.0) < 0.0);
    }

    #[test]
    fn amplitude_floor_tracks_line_width() {
        // 300 / 2 / 10 - 4 = 11
        assert_eq!(max_amplitude(300.0, 3.0), 11.0);
        // Short view: floor at 2 * line width
        assert_eq!(max_amplitude(100.0, 3.0), 6.0);
    }

    #[test]
    fn samples_overscan_past_width() {
        let cfg = WaveConfig::default();
        let path = generate(100.0, 200.0, 50.0, &state_at(50.0, 0.0), &cfg);
        let xs: Vec<f64> = path.samples().iter().map(|p| p.x).collect();
        assert_eq!(xs.first(), Some(&0.0));
        // 0, 5, ..., 100 then stop since 105 is not < 105
        assert_eq!(xs.len(), 21);
        assert_eq!(xs.last(), Some(&100.0));

        let path = generate(98.0, 200.0, 49.0, &state_at(50.0, 0.0), &cfg);
        // 0, 5, ..., 100: the last sample lands past the right edge
        assert_eq!(path.samples().last().map(|p| p.x), Some(100.0));
    }

    #[test]
    fn baseline_is_exact_where_envelope_vanishes() {
        let cfg = WaveConfig::default();
        for (percent, expected) in [(0.0, 200.0), (100.0, 0.0)] {
            let path =
                generate(100.0, 200.0, 50.0, &state_at(percent, 0.3), &cfg);
            let first = path.samples()[0];
            let edge = path.samples()[20];
            assert_eq!(first.y, expected);
            assert_eq!(edge.x, 100.0);
            assert_eq!(edge.y, expected);
        }
    }

    #[test]
    fn sample_matches_formula() {
        let cfg = WaveConfig::default();
        let state = state_at(30.0, 0.7);
        let path = generate(100.0, 300.0, 50.0, &state, &cfg);
        let p = path.samples()[4];
        assert_eq!(p.x, 20.0);

        let fx = TAU * (20.0 / 100.0) * 1.2 + 0.7;
        let scaling = -((20.0_f64 - 50.0) / 50.0).powi(2) + 1.0;
        let expected = scaling * 11.0 * 0.95 * fx.sin() + 300.0 * 70.0 / 100.0;
        assert!((p.y - expected).abs() < 1e-9);
    }

    #[test]
    fn path_closes_along_bottom_edge() {
        let cfg = WaveConfig::default();
        let path = generate(100.0, 200.0, 50.0, &state_at(40.0, 1.0), &cfg);
        let pts = path.points();
        let n = pts.len();
        let last_sample = *path.samples().last().unwrap();

        assert!(path.is_closed());
        assert_eq!(pts[n - 3], last_sample);
        assert_eq!(pts[n - 2], DVec2::new(100.0, 200.0));
        assert_eq!(pts[n - 1], DVec2::new(0.0, 200.0));
        assert_eq!(path.start(), Some(pts[0]));
    }

    #[test]
    fn direction_selects_sin_or_cos() {
        let left = WaveConfig::with_direction(WaveDirection::Left);
        let right = WaveConfig::with_direction(WaveDirection::Right);
        let state = state_at(50.0, 0.4);

        let pl = generate(100.0, 300.0, 50.0, &state, &left);
        let pr = generate(100.0, 300.0, 50.0, &state, &right);

        let x = 35.0;
        let fx = TAU * (x / 100.0) * 1.2 + 0.4;
        let scale = envelope(x, 50.0) * max_amplitude(300.0, 3.0) * 0.95;
        let base = baseline(300.0, 50.0);

        let yl = pl.samples()[7].y;
        let yr = pr.samples()[7].y;
        assert!(((yl - base) / scale - fx.sin()).abs() < 1e-9);
        assert!(((yr - base) / scale - fx.cos()).abs() < 1e-9);
        assert!((yl - yr).abs() > 1e-6);
        assert_eq!(waveform(WaveDirection::Left, fx), fx.sin());
        assert_eq!(waveform(WaveDirection::Right, fx), fx.cos());
    }

    #[test]
    fn fill_rises_with_percent() {
        let cfg = WaveConfig::default();
        let low = generate(100.0, 200.0, 50.0, &state_at(10.0, 0.0), &cfg);
        let high = generate(100.0, 200.0, 50.0, &state_at(90.0, 0.0), &cfg);

        let probe = DVec2::new(50.0, 100.0);
        assert!(!low.contains(probe));
        assert!(high.contains(probe));
    }

    #[test]
    fn degenerate_sizes_yield_empty_path() {
        let cfg = WaveConfig::default();
        let state = state_at(50.0, 0.0);
        assert!(generate(0.0, 200.0, 0.0, &state, &cfg).is_empty());
        assert!(generate(100.0, 0.0, 50.0, &state, &cfg).is_empty());
    }

    #[test]
    fn non_finite_sizes_yield_empty_path() {
        let cfg = WaveConfig::default();
        let state = state_at(50.0, 0.0);
        assert!(generate(f64::INFINITY, 200.0, 50.0, &state, &cfg).is_empty());
        assert!(generate(100.0, f64::NAN, 50.0, &state, &cfg).is_empty());
        assert!(generate(100.0, 200.0, f64::INFINITY, &state, &cfg).is_empty());
    }

    #[test]
    fn tiny_density_is_capped() {
        let cfg = WaveConfig {
            density: 1e-300,
            ..WaveConfig::default()
        };
        let path = generate(100.0, 200.0, 50.0, &state_at(50.0, 0.0), &cfg);
        assert_eq!(path.samples().len(), MAX_SAMPLES);
        assert_eq!(path.len(), MAX_SAMPLES + 2);
    }

    #[test]
    fn non_positive_density_does_not_loop() {
        let cfg = WaveConfig {
            density: 0.0,
            ..WaveConfig::default()
        };
        let path = generate(100.0, 200.0, 50.0, &state_at(50.0, 0.0), &cfg);
        assert_eq!(path.samples().len(), 1);
        assert_eq!(path.len(), 3);
    }
}
