use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::primitives::default_event_label;

use super::TimelineHost;

/// Caller-supplied label formatter receiving `(date value, event name, index)`.
pub type LabelFormatterFn = Arc<dyn Fn(&str, &str, usize) -> String + Send + Sync + 'static>;

impl TimelineHost {
    /// Installs a label formatter override used for every event.
    pub fn set_label_formatter(&mut self, formatter: LabelFormatterFn) {
        self.label_formatter = Some(formatter);
    }

    /// Removes the override, restoring the default name + UTC-date label.
    pub fn clear_label_formatter(&mut self) {
        self.label_formatter = None;
    }

    pub(super) fn format_label(
        &self,
        value: &str,
        name: &str,
        index: usize,
        date: DateTime<Utc>,
    ) -> String {
        match &self.label_formatter {
            Some(formatter) => formatter(value, name, index),
            None => default_event_label(name, date),
        }
    }
}
