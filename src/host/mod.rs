mod label_formatter;
mod presentation;
mod validation;

pub use label_formatter::LabelFormatterFn;
pub use presentation::{MotionTuning, TimelineStyles};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants;
use crate::core::primitives::parse_event_date;
use crate::core::spacing::{SpacingConstraints, cumulative_separation};
use crate::core::types::{TimelineEvent, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::surface::{TimelineFrame, TimelineSurface};

/// Host configuration with documented defaults.
///
/// `new` starts from the shared constants; the `with_*` builders override
/// individual parts without losing the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineHostConfig {
    pub viewport: Viewport,
    pub spacing: SpacingConstraints,
    /// Selected event index forwarded to the surface.
    pub index: usize,
    /// `false` pins the first event flush against the left container edge.
    pub is_open_beginning: bool,
    /// `false` pins the last event flush against the right container edge.
    pub is_open_ending: bool,
    pub is_touch_enabled: bool,
    pub is_keyboard_enabled: bool,
    pub styles: TimelineStyles,
    pub filling_motion: MotionTuning,
    pub sliding_motion: MotionTuning,
}

impl TimelineHostConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            spacing: SpacingConstraints::default(),
            index: 0,
            is_open_beginning: true,
            is_open_ending: true,
            is_touch_enabled: true,
            is_keyboard_enabled: true,
            styles: TimelineStyles::default(),
            filling_motion: MotionTuning::default(),
            sliding_motion: MotionTuning::default(),
        }
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: SpacingConstraints) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_selected_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    #[must_use]
    pub fn with_open_edges(mut self, beginning: bool, ending: bool) -> Self {
        self.is_open_beginning = beginning;
        self.is_open_ending = ending;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, touch: bool, keyboard: bool) -> Self {
        self.is_touch_enabled = touch;
        self.is_keyboard_enabled = keyboard;
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: TimelineStyles) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_filling_motion(mut self, motion: MotionTuning) -> Self {
        self.filling_motion = motion;
        self
    }

    #[must_use]
    pub fn with_sliding_motion(mut self, motion: MotionTuning) -> Self {
        self.sliding_motion = motion;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Main orchestration facade consumed by embedding applications.
///
/// The host owns the measured viewport and presentation configuration,
/// validates raw event inputs at the boundary, runs the spacing engine, and
/// hands fully materialized frames to a presentation surface.
pub struct TimelineHost {
    config: TimelineHostConfig,
    label_formatter: Option<LabelFormatterFn>,
}

impl std::fmt::Debug for TimelineHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineHost")
            .field("config", &self.config)
            .field(
                "label_formatter",
                &self.label_formatter.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

impl TimelineHost {
    pub fn new(config: TimelineHostConfig) -> TimelineResult<Self> {
        if !config.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        config.spacing.validate()?;

        Ok(Self {
            config,
            label_formatter: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TimelineHostConfig {
        &self.config
    }

    /// Applies a new measured container size, e.g. from a resize observer.
    pub fn set_viewport(&mut self, viewport: Viewport) -> TimelineResult<()> {
        if !viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        Ok(())
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.config.index = index;
    }

    /// Computes a full layout pass over the given date values and names.
    ///
    /// Inputs are validated up front: lengths must match, every value must
    /// parse as a date, and parsed dates must be sorted ascending. The frame
    /// carries events, scrollable geometry and the presentation config.
    pub fn layout(&self, values: &[String], names: &[String]) -> TimelineResult<TimelineFrame> {
        validation::validate_input_lengths(values, names)?;

        let dates = values
            .iter()
            .map(|value| parse_event_date(value))
            .collect::<TimelineResult<Vec<DateTime<Utc>>>>()?;
        validation::validate_ascending(&dates)?;

        let offsets = cumulative_separation(&dates, self.config.spacing)?;
        debug!(event_count = offsets.len(), "computed event offsets");

        let events: Vec<TimelineEvent> = offsets
            .iter()
            .enumerate()
            .map(|(index, &distance)| {
                TimelineEvent::new(
                    distance,
                    self.format_label(&values[index], &names[index], index, dates[index]),
                    values[index].clone(),
                )
            })
            .collect();

        // Non-empty by construction: cumulative_separation rejects empty input.
        let first_distance = offsets[0];
        let last_distance = offsets[offsets.len() - 1];

        let visible_width = f64::from(self.config.viewport.width) - constants::EDGE_GUTTER;
        let total_width = (last_distance + self.config.spacing.line_padding).max(visible_width);

        let bar_padding_right = if self.config.is_open_ending {
            0.0
        } else {
            total_width - last_distance
        };
        let bar_padding_left = if self.config.is_open_beginning {
            0.0
        } else {
            first_distance
        };

        trace!(
            total_width,
            bar_padding_left, bar_padding_right, "derived bar geometry"
        );

        Ok(TimelineFrame {
            viewport: self.config.viewport,
            events,
            total_width,
            visible_width,
            bar_padding_left,
            bar_padding_right,
            label_width: self.config.spacing.label_width,
            index: self.config.index,
            is_touch_enabled: self.config.is_touch_enabled,
            is_keyboard_enabled: self.config.is_keyboard_enabled,
            styles: self.config.styles.clone(),
            filling_motion: self.config.filling_motion,
            sliding_motion: self.config.sliding_motion,
        })
    }

    /// Runs a layout pass and delegates the frame to a presentation surface.
    pub fn present<S: TimelineSurface>(
        &self,
        surface: &mut S,
        values: &[String],
        names: &[String],
    ) -> TimelineResult<()> {
        let frame = self.layout(values, names)?;
        surface.present(&frame)
    }
}
