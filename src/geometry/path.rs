//! Closed polygon produced by the wave sampler.

use std::fmt::Write;

use glam::DVec2;

/// A closed polygon: the sampled wave line followed by the bottom-right and
/// bottom-left corners of the view.
///
/// The closing edge from the last corner back to the first sample is
/// implicit; [`points`](Self::points) never repeats the start point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WavePath {
    points: Vec<DVec2>,
    sample_count: usize,
    closed: bool,
}

impl WavePath {
    /// A path with no points.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Close `samples` over a view of `width` x `height` by appending
    /// `(width, height)` and `(0, height)`.
    #[must_use]
    pub fn closed_over(samples: Vec<DVec2>, width: f64, height: f64) -> Self {
        if samples.is_empty() {
            return Self::empty();
        }
        let sample_count = samples.len();
        let mut points = samples;
        points.reserve(2);
        points.push(DVec2::new(width, height));
        points.push(DVec2::new(0.0, height));
        Self {
            points,
            sample_count,
            closed: true,
        }
    }

    /// All vertices in drawing order: samples first, then the two corners.
    #[must_use]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Only the wave samples, without the closing corners.
    #[must_use]
    pub fn samples(&self) -> &[DVec2] {
        &self.points[..self.sample_count]
    }

    /// First vertex, where the path starts and closes back to.
    #[must_use]
    pub fn start(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// Whether the path closes back to its start.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of vertices, corners included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }

    /// Even-odd point-in-polygon test, for using the path as a clip mask.
    ///
    /// Uses ray casting along +x.
    #[must_use]
    pub fn contains(&self, point: DVec2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if ((pi.y > point.y) != (pj.y > point.y))
                && (point.x
                    < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// SVG path data (`M`, `L`, `Z` commands).
    #[must_use]
    pub fn to_svg_data(&self) -> String {
        let mut data = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(&mut data, "{cmd}{:.3},{:.3} ", p.x, p.y);
        }
        if self.closed {
            data.push('Z');
        }
        data.trim_end().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> WavePath {
        WavePath::closed_over(
            vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)],
            10.0,
            10.0,
        )
    }

    #[test]
    fn closing_appends_bottom_corners() {
        let path = square();
        assert!(path.is_closed());
        assert_eq!(path.len(), 4);
        assert_eq!(path.samples().len(), 2);
        assert_eq!(path.points()[2], DVec2::new(10.0, 10.0));
        assert_eq!(path.points()[3], DVec2::new(0.0, 10.0));
        assert_eq!(path.start(), Some(DVec2::ZERO));
    }

    #[test]
    fn contains_uses_even_odd_rule() {
        let path = square();
        assert!(path.contains(DVec2::new(5.0, 5.0)));
        assert!(!path.contains(DVec2::new(15.0, 5.0)));
        assert!(!path.contains(DVec2::new(5.0, -1.0)));
    }

    #[test]
    fn empty_samples_make_empty_path() {
        let path = WavePath::closed_over(Vec::new(), 10.0, 10.0);
        assert!(path.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.bounds(), None);
        assert!(!path.contains(DVec2::ZERO));
    }

    #[test]
    fn svg_data_closes_path() {
        assert_eq!(
            square().to_svg_data(),
            "M0.000,0.000 L10.000,0.000 L10.000,10.000 L0.000,10.000 Z"
        );
    }

    #[test]
    fn bounds_cover_all_points() {
        let path = WavePath::closed_over(
            vec![DVec2::new(0.0, 3.0), DVec2::new(12.0, -2.0)],
            10.0,
            8.0,
        );
        assert_eq!(
            path.bounds(),
            Some((DVec2::new(0.0, -2.0), DVec2::new(12.0, 8.0)))
        );
    }
}
