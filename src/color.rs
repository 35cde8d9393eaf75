//! Colors and the two-stop gradient painted through the wave clip.
//!
//! The crate never rasterizes; [`LinearGradient`] is a descriptor the host
//! surface hands to its own drawing API, with [`LinearGradient::color_at`]
//! available for software fallbacks and tests.

use glam::{DVec2, Vec4};

/// A straight-alpha RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub Vec4);

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(Vec4::ZERO);

    /// Color from normalized components. Values are clamped to [0, 1].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(Vec4::new(r, g, b, a).clamp(Vec4::ZERO, Vec4::ONE))
    }

    /// Color from 0-255 channels and an optional [0, 1] alpha (default 1).
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8, a: Option<f32>) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            a.unwrap_or(1.0),
        )
    }

    /// Color from an `[r, g, b, a]` array of normalized components.
    #[must_use]
    pub fn from_array(rgba: [f32; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Components as `[r, g, b, a]`.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    /// Red component.
    #[must_use]
    pub fn r(self) -> f32 {
        self.0.x
    }

    /// Green component.
    #[must_use]
    pub fn g(self) -> f32 {
        self.0.y
    }

    /// Blue component.
    #[must_use]
    pub fn b(self) -> f32 {
        self.0.z
    }

    /// Alpha component.
    #[must_use]
    pub fn a(self) -> f32 {
        self.0.w
    }

    /// Component-wise linear blend toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self(self.0.lerp(other.0, t.clamp(0.0, 1.0)))
    }

    /// `#rrggbb` hex string (alpha dropped), for SVG output.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_array();
        format!(
            "#{:02x}{:02x}{:02x}",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Stop locations used by the wave fill.
pub const DEFAULT_LOCATIONS: [f32; 2] = [0.0, 0.85];

/// A two-stop linear gradient along the segment `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    /// Color at and before the first stop.
    pub start: Rgba,
    /// Color at and after the second stop.
    pub end: Rgba,
    /// Stop positions along the axis, in [0, 1].
    pub locations: [f32; 2],
    /// Axis start point in view coordinates.
    pub from: DVec2,
    /// Axis end point in view coordinates.
    pub to: DVec2,
}

impl LinearGradient {
    /// Top-to-bottom gradient spanning a view of `width` x `height`.
    #[must_use]
    pub fn vertical(start: Rgba, end: Rgba, width: f64, height: f64) -> Self {
        let mid_x = width / 2.0;
        Self {
            start,
            end,
            locations: DEFAULT_LOCATIONS,
            from: DVec2::new(mid_x, 0.0),
            to: DVec2::new(mid_x, height),
        }
    }

    /// Replace the stop locations. Stops are reordered if given backwards.
    #[must_use]
    pub fn with_locations(mut self, first: f32, second: f32) -> Self {
        let (lo, hi) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        self.locations = [lo.clamp(0.0, 1.0), hi.clamp(0.0, 1.0)];
        self
    }

    /// Color at axis parameter `t` (0 at `from`, 1 at `to`).
    #[must_use]
    pub fn sample(&self, t: f32) -> Rgba {
        let [lo, hi] = self.locations;
        if t <= lo {
            return self.start;
        }
        if t >= hi {
            return self.end;
        }
        self.start.lerp(self.end, (t - lo) / (hi - lo))
    }

    /// Color at a view-space point, projected onto the gradient axis.
    ///
    /// A degenerate axis (`from == to`) paints the end color everywhere.
    #[must_use]
    pub fn color_at(&self, point: DVec2) -> Rgba {
        let axis = self.to - self.from;
        let len_sq = axis.length_squared();
        if len_sq <= f64::EPSILON {
            return self.end;
        }
        let t = (point - self.from).dot(axis) / len_sq;
        self.sample(t as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn from_rgb_normalizes_channels() {
        let c = Rgba::from_rgb(255, 51, 0, None);
        assert_eq!(c.r(), 1.0);
        assert!(approx(c.g(), 0.2));
        assert_eq!(c.b(), 0.0);
        assert_eq!(c.a(), 1.0);

        let c = Rgba::from_rgb(0, 0, 0, Some(0.6));
        assert!(approx(c.a(), 0.6));
    }

    #[test]
    fn components_are_clamped() {
        let c = Rgba::new(1.5, -0.2, 0.5, 2.0);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn hex_drops_alpha() {
        assert_eq!(Rgba::from_rgb(255, 51, 186, Some(0.8)).to_hex(), "#ff33ba");
    }

    #[test]
    fn gradient_holds_end_color_past_second_stop() {
        let start = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let end = Rgba::new(0.0, 0.0, 1.0, 1.0);
        let g = LinearGradient::vertical(start, end, 100.0, 200.0);

        assert_eq!(g.color_at(DVec2::new(50.0, 0.0)), start);
        assert_eq!(g.color_at(DVec2::new(10.0, 190.0)), end);
        assert_eq!(g.sample(0.85), end);

        let mid = g.sample(0.425);
        assert!(approx(mid.r(), 0.5));
        assert!(approx(mid.b(), 0.5));
    }

    #[test]
    fn swapped_locations_are_reordered() {
        let g = LinearGradient::vertical(
            Rgba::TRANSPARENT,
            Rgba::new(1.0, 1.0, 1.0, 1.0),
            10.0,
            10.0,
        )
        .with_locations(0.9, 0.1);
        assert_eq!(g.locations, [0.1, 0.9]);
    }

    #[test]
    fn degenerate_axis_paints_end_color() {
        let mut g = LinearGradient::vertical(
            Rgba::TRANSPARENT,
            Rgba::new(0.0, 1.0, 0.0, 1.0),
            10.0,
            10.0,
        );
        g.to = g.from;
        assert_eq!(g.color_at(DVec2::new(3.0, 3.0)), g.end);
    }
}
