use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One positioned timeline entry, index-aligned with the host input arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Cumulative pixel offset along the timeline's principal axis.
    pub distance: f64,
    pub label: String,
    /// The original date value the event was built from.
    pub date: String,
}

impl TimelineEvent {
    #[must_use]
    pub fn new(distance: f64, label: String, date: String) -> Self {
        Self {
            distance,
            label,
            date,
        }
    }
}
