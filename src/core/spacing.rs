use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants;
use crate::core::primitives::day_difference;
use crate::error::{TimelineError, TimelineResult};

/// Pixel-space tuning for event separation.
///
/// `label_width` is the footprint every event reserves regardless of elapsed
/// time; the two paddings bound the time-proportional part of each gap;
/// `line_padding` is the fixed offset before the first and after the last
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingConstraints {
    pub label_width: f64,
    pub min_event_padding: f64,
    pub max_event_padding: f64,
    pub line_padding: f64,
}

impl Default for SpacingConstraints {
    fn default() -> Self {
        Self {
            label_width: constants::DATE_WIDTH,
            min_event_padding: constants::MIN_EVENT_PADDING,
            max_event_padding: constants::MAX_EVENT_PADDING,
            line_padding: constants::TIMELINE_PADDING,
        }
    }
}

impl SpacingConstraints {
    pub fn validate(self) -> TimelineResult<Self> {
        let fields = [
            ("label width", self.label_width),
            ("min event padding", self.min_event_padding),
            ("max event padding", self.max_event_padding),
            ("line padding", self.line_padding),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidConstraints(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        if self.min_event_padding > self.max_event_padding {
            return Err(TimelineError::InvalidConstraints(
                "min event padding must not exceed max event padding".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Converts chronologically ordered dates into cumulative pixel offsets.
///
/// The largest whole-day gap between adjacent dates is mapped onto
/// `max_event_padding` and every other gap is scaled by the same linear
/// factor, so relative chronology survives on screen. Each scaled gap is then
/// clamped into `[min_event_padding, max_event_padding]` and widened by
/// `label_width` so neighboring labels never overlap. Offsets are the running
/// sum of gaps, seeded with `line_padding`.
///
/// A single date yields `[line_padding]`. An empty slice is rejected with
/// [`TimelineError::EmptyDates`].
pub fn cumulative_separation(
    dates: &[DateTime<Utc>],
    constraints: SpacingConstraints,
) -> TimelineResult<Vec<f64>> {
    let constraints = constraints.validate()?;

    if dates.is_empty() {
        return Err(TimelineError::EmptyDates);
    }

    let mut offsets = Vec::with_capacity(dates.len());
    offsets.push(constraints.line_padding);

    if dates.len() == 1 {
        return Ok(offsets);
    }

    let day_gaps: SmallVec<[i64; 16]> = dates
        .windows(2)
        .map(|pair| day_difference(pair[0], pair[1]))
        .collect();

    let max_day_gap = day_gaps.iter().copied().max().unwrap_or(0);

    // When every pair falls on the same day the scaled gap degenerates to
    // zero and the clamp floor takes over.
    let scale = if max_day_gap > 0 {
        constraints.max_event_padding / max_day_gap as f64
    } else {
        0.0
    };

    let mut cursor = constraints.line_padding;
    for day_gap in day_gaps {
        let padding = (day_gap as f64 * scale).clamp(
            constraints.min_event_padding,
            constraints.max_event_padding,
        );
        cursor += constraints.label_width + padding;
        offsets.push(cursor);
    }

    Ok(offsets)
}
