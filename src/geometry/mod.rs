//! Wave fill geometry.
//!
//! [`wave::generate`] samples the wave for the current percent and phase and
//! closes it into a [`WavePath`] that hosts use as a clip region.

/// Closed polygon type with hit testing and SVG export.
pub mod path;
/// Wave sampler and its envelope/amplitude helpers.
pub mod wave;

pub use path::WavePath;
pub use wave::generate;
