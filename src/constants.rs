//! Shared layout defaults consumed by `SpacingConstraints` and the host.
//!
//! The spacing engine itself hard-codes nothing; every default lives here so
//! embedders can see (and mirror) the exact numbers in one place.

/// Smallest time-proportional padding between two adjacent events, in pixels.
pub const MIN_EVENT_PADDING: f64 = 20.0;

/// Largest time-proportional padding between two adjacent events, in pixels.
pub const MAX_EVENT_PADDING: f64 = 120.0;

/// Fixed offset reserved before the first and after the last event, in pixels.
pub const TIMELINE_PADDING: f64 = 100.0;

/// Horizontal footprint reserved for each event label, in pixels.
pub const DATE_WIDTH: f64 = 85.0;

/// Width subtracted from the measured container to derive the visible bar
/// area, in pixels. Leaves room for the scroll affordances at both edges.
pub const EDGE_GUTTER: f64 = 80.0;
