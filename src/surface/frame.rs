use serde::{Deserialize, Serialize};

use crate::core::types::{TimelineEvent, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::host::{MotionTuning, TimelineStyles};

/// Fully materialized timeline layout for one presentation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub viewport: Viewport,
    pub events: Vec<TimelineEvent>,
    /// Scrollable width of the whole line, never below `visible_width`.
    pub total_width: f64,
    pub visible_width: f64,
    pub bar_padding_left: f64,
    pub bar_padding_right: f64,
    pub label_width: f64,
    /// Selected event index.
    pub index: usize,
    pub is_touch_enabled: bool,
    pub is_keyboard_enabled: bool,
    pub styles: TimelineStyles,
    pub filling_motion: MotionTuning,
    pub sliding_motion: MotionTuning,
}

impl TimelineFrame {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if self.events.is_empty() {
            return Err(TimelineError::EmptyDates);
        }

        if self.index >= self.events.len() {
            return Err(TimelineError::InvalidData(format!(
                "selected index {} out of range for {} events",
                self.index,
                self.events.len()
            )));
        }

        for event in &self.events {
            if !event.distance.is_finite() {
                return Err(TimelineError::InvalidData(
                    "event distances must be finite".to_owned(),
                ));
            }
        }

        for pair in self.events.windows(2) {
            if pair[1].distance <= pair[0].distance {
                return Err(TimelineError::InvalidData(
                    "event distances must be strictly increasing".to_owned(),
                ));
            }
        }

        Ok(())
    }

    /// Serializes the frame as pretty JSON for fixture-based regression checks.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize frame: {e}")))
    }

    #[must_use]
    pub fn last_distance(&self) -> Option<f64> {
        self.events.last().map(|event| event.distance)
    }
}
