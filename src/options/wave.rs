use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WaveError;

/// Smallest accepted sample step, in pixels.
pub const MIN_DENSITY: f64 = 1.0;

/// Horizontal travel direction of the wave.
///
/// The two directions use different waveforms: `Left` samples `sin`,
/// `Right` samples `cos` and negates the phase shift.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WaveDirection {
    /// Wave crests travel leftwards.
    #[default]
    Left,
    /// Wave crests travel rightwards.
    Right,
}

impl WaveDirection {
    /// Sign applied to the per-tick phase shift.
    #[must_use]
    pub fn phase_sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Wave", inline)]
#[serde(default)]
/// Per-instance wave constants: timing, phase travel and path shape.
pub struct WaveConfig {
    /// Length of the percent interpolation window, in seconds.
    #[schemars(
        title = "Animation Duration",
        range(min = 0.0, max = 10.0),
        extend("step" = 0.1)
    )]
    pub animation_duration: f64,
    /// Phase added every tick while idle (radians). Morphing ticks use 2.4x.
    #[schemars(title = "Phase Shift", extend("step" = 0.005))]
    pub phase_shift: f64,
    /// Stroke width; also floors the wave amplitude at `2 * line_width`.
    #[schemars(
        title = "Line Width",
        range(min = 0.0, max = 10.0),
        extend("step" = 0.5)
    )]
    pub line_width: f64,
    /// Number of wave periods across the view width.
    #[schemars(
        title = "Frequency",
        range(min = 0.1, max = 5.0),
        extend("step" = 0.05)
    )]
    pub frequency: f64,
    /// Amplitude multiplier applied on top of the height-derived maximum.
    #[schemars(
        title = "Amplitude",
        range(min = 0.0, max = 2.0),
        extend("step" = 0.05)
    )]
    pub amplitude: f64,
    /// Horizontal distance between samples, in pixels.
    #[schemars(
        title = "Density",
        range(min = 1.0, max = 20.0),
        extend("step" = 1.0)
    )]
    pub density: f64,
    /// Wave travel direction.
    #[schemars(title = "Direction")]
    pub direction: WaveDirection,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            animation_duration: 4.0,
            phase_shift: -0.02,
            line_width: 3.0,
            frequency: 1.2,
            amplitude: 0.95,
            density: 5.0,
            direction: WaveDirection::Left,
        }
    }
}

impl WaveConfig {
    /// Default constants travelling in the given direction.
    #[must_use]
    pub fn with_direction(direction: WaveDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Reject values the tick loop or path sampler cannot work with.
    ///
    /// A zero animation duration is valid and means instant convergence.
    pub fn validate(&self) -> Result<(), WaveError> {
        let fields = [
            ("animation_duration", self.animation_duration),
            ("phase_shift", self.phase_shift),
            ("line_width", self.line_width),
            ("frequency", self.frequency),
            ("amplitude", self.amplitude),
            ("density", self.density),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(WaveError::InvalidConfig(format!(
                "{name} must be finite"
            )));
        }
        if self.animation_duration < 0.0 {
            return Err(WaveError::InvalidConfig(
                "animation_duration must not be negative".to_owned(),
            ));
        }
        if self.density < MIN_DENSITY {
            return Err(WaveError::InvalidConfig(format!(
                "density must be at least {MIN_DENSITY}"
            )));
        }
        if self.line_width < 0.0 {
            return Err(WaveError::InvalidConfig(
                "line_width must not be negative".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let cfg = WaveConfig::default();
        assert_eq!(cfg.animation_duration, 4.0);
        assert_eq!(cfg.phase_shift, -0.02);
        assert_eq!(cfg.line_width, 3.0);
        assert_eq!(cfg.frequency, 1.2);
        assert_eq!(cfg.amplitude, 0.95);
        assert_eq!(cfg.density, 5.0);
        assert_eq!(cfg.direction, WaveDirection::Left);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_duration_is_valid() {
        let cfg = WaveConfig {
            animation_duration: 0.0,
            ..WaveConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_density_and_nan() {
        let cfg = WaveConfig {
            density: 0.0,
            ..WaveConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(WaveError::InvalidConfig(_))));

        let cfg = WaveConfig {
            frequency: f64::NAN,
            ..WaveConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("frequency"));
    }

    #[test]
    fn rejects_density_below_floor() {
        let cfg = WaveConfig {
            density: 1e-300,
            ..WaveConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("density"));

        let cfg = WaveConfig {
            density: MIN_DENSITY,
            ..WaveConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn direction_serializes_snake_case() {
        let cfg = WaveConfig::with_direction(WaveDirection::Right);
        let toml_str = toml::to_string(&cfg).unwrap();
        assert!(toml_str.contains("direction = \"right\""));
        assert_eq!(WaveDirection::Right.phase_sign(), -1.0);
    }
}
