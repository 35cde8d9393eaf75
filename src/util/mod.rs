//! Shared utilities.
//!
//! Helpers for frame timing and pacing.

pub mod frame_timing;
