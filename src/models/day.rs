use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday key for a weekly schedule
///
/// Days are ordered Monday-first; this ordering drives schedule iteration,
/// canonical-key construction, and validation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayKey {
    /// All seven days in fixed Monday-first order
    pub const ALL: [DayKey; 7] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    /// Parse from the lowercase key used in stored schedules
    ///
    /// # Returns
    /// Some(DayKey) for "mon".."sun", None otherwise
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mon" => Some(DayKey::Mon),
            "tue" => Some(DayKey::Tue),
            "wed" => Some(DayKey::Wed),
            "thu" => Some(DayKey::Thu),
            "fri" => Some(DayKey::Fri),
            "sat" => Some(DayKey::Sat),
            "sun" => Some(DayKey::Sun),
            _ => None,
        }
    }

    /// Lowercase key used in stored schedules
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKey::Mon => "mon",
            DayKey::Tue => "tue",
            DayKey::Wed => "wed",
            DayKey::Thu => "thu",
            DayKey::Fri => "fri",
            DayKey::Sat => "sat",
            DayKey::Sun => "sun",
        }
    }

    /// The other six days, in schedule order (copy-day targets)
    pub fn others(&self) -> Vec<DayKey> {
        Self::ALL.iter().copied().filter(|d| d != self).collect()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_key_round_trip() {
        for day in DayKey::ALL {
            assert_eq!(DayKey::from_str(day.as_str()), Some(day));
        }
        assert_eq!(DayKey::from_str("monday"), None);
        assert_eq!(DayKey::from_str(""), None);
    }

    #[test]
    fn test_all_is_monday_first() {
        assert_eq!(DayKey::ALL.len(), 7);
        assert_eq!(DayKey::ALL[0], DayKey::Mon);
        assert_eq!(DayKey::ALL[6], DayKey::Sun);
    }

    #[test]
    fn test_others_excludes_self() {
        let others = DayKey::Wed.others();
        assert_eq!(others.len(), 6);
        assert!(!others.contains(&DayKey::Wed));
        assert_eq!(others[0], DayKey::Mon);
    }
}
