use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation resolution for sales reporting
///
/// Sales records are bucketed either by ISO week (Monday-first, week 1 is
/// the week containing the year's first Thursday) or by calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// ISO week buckets, keyed `YYYY-Www`
    Week,
    /// Calendar month buckets, keyed `YYYY-MM`
    Month,
}

impl Granularity {
    /// Parse from string representation
    ///
    /// # Returns
    /// Some(Granularity) for "week" or "month", None otherwise
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "week" => Some(Granularity::Week),
            "month" => Some(Granularity::Month),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Week
    }
}
