//! Wave options with TOML preset support.
//!
//! All tweakable settings (timing, phase travel, path shape, gradient colors)
//! are consolidated here. Options serialize to/from TOML for presets stored
//! in `assets/wave_presets/`.

mod gradient;
mod wave;

use std::path::Path;

pub use gradient::GradientOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use wave::{WaveConfig, WaveDirection, MIN_DENSITY};

use crate::error::WaveError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[wave]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Wave timing and shape constants.
    pub wave: WaveConfig,
    /// Gradient fill parameters.
    pub gradient: GradientOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string and validate the wave section.
    pub fn from_toml(content: &str) -> Result<Self, WaveError> {
        let opts: Self = toml::from_str(content)
            .map_err(|e| WaveError::OptionsParse(e.to_string()))?;
        opts.wave.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, WaveError> {
        let content = std::fs::read_to_string(path).map_err(WaveError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), WaveError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaveError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WaveError::Io)?;
        }
        std::fs::write(path, content).map_err(WaveError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[wave]
frequency = 2.0
direction = "right"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.wave.frequency, 2.0);
        assert_eq!(opts.wave.direction, WaveDirection::Right);
        // Everything else should be default
        assert_eq!(opts.wave.animation_duration, 4.0);
        assert_eq!(opts.gradient.end_location, 0.85);
    }

    #[test]
    fn invalid_wave_section_is_rejected() {
        let toml_str = r"
[wave]
density = -1.0
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, WaveError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[wave\nfrequency = ").unwrap_err();
        assert!(matches!(err, WaveError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("gradient-wave-presets-{}", std::process::id()));
        let path = dir.join("calm.toml");
        let mut opts = Options::default();
        opts.wave.phase_shift = -0.01;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("wave"));
        assert!(props.contains_key("gradient"));

        let wave = &props["wave"]["properties"];
        assert!(wave.get("frequency").is_some());
        assert!(wave.get("direction").is_some());

        // Colors are edited elsewhere, only the stop location is exposed
        let gradient = &props["gradient"]["properties"];
        assert!(gradient.get("end_location").is_some());
        assert!(gradient.get("start_color").is_none());
    }
}
