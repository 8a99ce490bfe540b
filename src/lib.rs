//! timeline-rs: horizontal timeline layout engine.
//!
//! This crate computes where dated events sit along a horizontal axis:
//! consecutive gaps are proportional to elapsed time, clamped so labels never
//! collide and the line never grows pathologically sparse. Rendering is left
//! to embedders through the [`surface::TimelineSurface`] seam.

pub mod constants;
pub mod core;
pub mod error;
pub mod host;
pub mod surface;
pub mod telemetry;

pub use error::{TimelineError, TimelineResult};
pub use host::{TimelineHost, TimelineHostConfig};
