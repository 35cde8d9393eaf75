// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated gradient wave geometry for percentage indicators.
//!
//! A wave fills a masked view up to a percent. Setting a new percent starts
//! an interpolation that is stepped once per display frame, while the wave's
//! phase keeps travelling horizontally so the surface looks alive.
//!
//! # Key entry points
//!
//! - [`component::GradientWave`] - the wave component a host surface owns
//! - [`animation::PercentAnimator`] - the percent/phase state machine
//! - [`geometry::generate`] - the per-frame wave path sampler
//! - [`scheduler::FrameClock`] - injected frame source with explicit
//!   subscriptions
//! - [`options::Options`] - wave constants and gradient colors, with TOML
//!   presets
//!
//! # Frame flow
//!
//! The host advances a [`scheduler::FrameClock`] once per refresh and passes
//! the resulting tick to each subscribed wave. The wave steps its animator,
//! then the host asks for [`component::WaveSurface::render_path`] and paints
//! the wave's gradient clipped to that path. Nothing here rasterizes.

pub mod animation;
pub mod color;
pub mod component;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod options;
pub mod scheduler;
pub mod util;

pub use component::{GradientWave, WaveSurface};
pub use error::WaveError;
