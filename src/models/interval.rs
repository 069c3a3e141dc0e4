use crate::utils::is_valid_time;
use serde::{Deserialize, Serialize};

/// A single opening interval within one day
///
/// Represents the half-open range `[open, close)`; intervals never span
/// midnight. Both fields are 24-hour `HH:MM` literals, but malformed or
/// empty values are representable (interactive edits go through partially
/// typed states) and are simply ignored by validation until well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Opening time, e.g. "09:00"
    #[serde(default)]
    pub open: String,

    /// Closing time, e.g. "12:30"
    #[serde(default)]
    pub close: String,
}

impl TimeInterval {
    /// Create a new interval
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Whether both endpoints are well-formed `HH:MM` literals
    pub fn is_well_formed(&self) -> bool {
        is_valid_time(&self.open) && is_valid_time(&self.close)
    }
}
