use crate::error::TimelineResult;
use crate::surface::{TimelineFrame, TimelineSurface};

/// No-op surface used by tests and headless hosts.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real presentation backend is introduced.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub last_event_count: usize,
    pub present_count: usize,
}

impl TimelineSurface for NullSurface {
    fn present(&mut self, frame: &TimelineFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.last_event_count = frame.events.len();
        self.present_count += 1;
        Ok(())
    }
}
