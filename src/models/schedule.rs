use super::{DayIntervals, DayKey, TimeInterval};
use serde::{Deserialize, Serialize};

/// Weekly opening-hours schedule
///
/// All seven day keys are always present; an empty interval sequence means
/// the facility is closed that day. The struct serializes to the stored
/// profile shape (`{"mon": [...], ..., "sun": [...]}`), and missing days
/// deserialize to empty sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub mon: DayIntervals,
    #[serde(default)]
    pub tue: DayIntervals,
    #[serde(default)]
    pub wed: DayIntervals,
    #[serde(default)]
    pub thu: DayIntervals,
    #[serde(default)]
    pub fri: DayIntervals,
    #[serde(default)]
    pub sat: DayIntervals,
    #[serde(default)]
    pub sun: DayIntervals,
}

impl WeeklySchedule {
    /// Intervals for one day
    pub fn day(&self, day: DayKey) -> &[TimeInterval] {
        match day {
            DayKey::Mon => &self.mon,
            DayKey::Tue => &self.tue,
            DayKey::Wed => &self.wed,
            DayKey::Thu => &self.thu,
            DayKey::Fri => &self.fri,
            DayKey::Sat => &self.sat,
            DayKey::Sun => &self.sun,
        }
    }

    /// Mutable intervals for one day
    pub fn day_mut(&mut self, day: DayKey) -> &mut DayIntervals {
        match day {
            DayKey::Mon => &mut self.mon,
            DayKey::Tue => &mut self.tue,
            DayKey::Wed => &mut self.wed,
            DayKey::Thu => &mut self.thu,
            DayKey::Fri => &mut self.fri,
            DayKey::Sat => &mut self.sat,
            DayKey::Sun => &mut self.sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;

    #[test]
    fn test_default_is_closed_all_week() {
        let schedule = WeeklySchedule::default();
        for day in DayKey::ALL {
            assert!(schedule.day(day).is_empty());
        }
    }

    #[test]
    fn test_missing_days_deserialize_empty() {
        let schedule: WeeklySchedule =
            serde_json::from_str(r#"{"mon":[{"open":"09:00","close":"12:00"}]}"#).unwrap();
        assert_eq!(schedule.mon, vec![TimeInterval::new("09:00", "12:00")]);
        assert!(schedule.sun.is_empty());
    }

    #[test]
    fn test_day_mut_targets_the_right_day() {
        let mut schedule = WeeklySchedule::default();
        schedule
            .day_mut(DayKey::Sat)
            .push(TimeInterval::new("10:00", "13:00"));
        assert_eq!(schedule.sat.len(), 1);
        assert!(schedule.fri.is_empty());
    }
}
