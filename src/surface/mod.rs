mod frame;
mod null_surface;

pub use frame::TimelineFrame;
pub use null_surface::NullSurface;

use crate::error::TimelineResult;

/// Contract implemented by any presentation backend.
///
/// Surfaces receive a fully materialized, deterministic `TimelineFrame` so
/// drawing code remains isolated from layout and input-validation logic.
pub trait TimelineSurface {
    fn present(&mut self, frame: &TimelineFrame) -> TimelineResult<()>;
}
