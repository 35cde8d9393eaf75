use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Gradient fill colors for the wave silhouette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gradient", inline)]
#[serde(default)]
pub struct GradientOptions {
    /// RGBA color at the top of the view (first stop).
    #[schemars(skip)]
    pub start_color: [f32; 4],
    /// RGBA color toward the bottom of the view (second stop).
    #[schemars(skip)]
    pub end_color: [f32; 4],
    /// Location of the second stop along the top-to-bottom axis.
    #[schemars(
        title = "End Stop",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.01)
    )]
    pub end_location: f32,
}

impl Default for GradientOptions {
    fn default() -> Self {
        // Pink heart palette.
        Self {
            start_color: Rgba::from_rgb(255, 51, 186, Some(0.8)).to_array(),
            end_color: Rgba::from_rgb(255, 237, 249, Some(0.6)).to_array(),
            end_location: 0.85,
        }
    }
}

impl GradientOptions {
    /// Start color as [`Rgba`].
    #[must_use]
    pub fn start(&self) -> Rgba {
        Rgba::from_array(self.start_color)
    }

    /// End color as [`Rgba`].
    #[must_use]
    pub fn end(&self) -> Rgba {
        Rgba::from_array(self.end_color)
    }
}
