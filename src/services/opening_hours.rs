use crate::constants::{DEFAULT_CLOSE_TIME, DEFAULT_OPEN_TIME, NEW_SLOT_SPAN_MINUTES};
use crate::error::Result;
use crate::models::{DayKey, TimeInterval, WeeklySchedule};
use crate::utils::{add_minutes, coerce_time};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Per-day validation failure
///
/// A day reports at most one failure; an invalid range suppresses the
/// overlap scan for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayError {
    /// Some interval has `open >= close`
    InvalidRange,
    /// Two sorted intervals overlap
    Overlap,
}

impl DayError {
    /// Advisory message shown next to the offending day
    pub fn message(&self) -> &'static str {
        match self {
            DayError::InvalidRange => "opening time must come before closing time",
            DayError::Overlap => "overlapping time slots",
        }
    }
}

impl fmt::Display for DayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Which endpoint of an interval an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalField {
    Open,
    Close,
}

/// Validation state of a schedule; days absent from the map are valid
pub type ValidationErrors = BTreeMap<DayKey, DayError>;

/// Coerce an arbitrary external value into a complete weekly schedule
///
/// Total over any input: `null`, non-objects, missing or non-array day
/// values become empty day sequences, and each slot element keeps whatever
/// string `open`/`close` carry (missing or non-string endpoints become `""`).
///
/// # Arguments
/// * `raw` - Raw profile value as fetched from storage
///
/// # Returns
/// A schedule with all seven day keys present
pub fn normalize(raw: &Value) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::default();
    let Some(obj) = raw.as_object() else {
        return schedule;
    };

    for day in DayKey::ALL {
        let Some(slots) = obj.get(day.as_str()).and_then(Value::as_array) else {
            continue;
        };
        *schedule.day_mut(day) = slots
            .iter()
            .map(|slot| TimeInterval {
                open: field_string(slot, "open"),
                close: field_string(slot, "close"),
            })
            .collect();
    }

    schedule
}

/// Parse JSON text and normalize it into a weekly schedule
///
/// The only fallible entry point: the text itself must be valid JSON, but
/// any JSON value normalizes.
pub fn normalize_json(raw: &str) -> Result<WeeklySchedule> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(normalize(&value))
}

fn field_string(slot: &Value, field: &str) -> String {
    slot.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Validate a schedule day by day
///
/// Per day: keep only well-formed `HH:MM` slots, sort them by opening time,
/// report `InvalidRange` if any slot has `open >= close` (skipping the
/// overlap scan for that day), otherwise report `Overlap` when a slot closes
/// after the next one opens. Touching slots (`close == next open`) are legal.
///
/// # Returns
/// Advisory map with an entry only for each invalid day
pub fn validate(schedule: &WeeklySchedule) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for day in DayKey::ALL {
        let mut slots: Vec<&TimeInterval> = schedule
            .day(day)
            .iter()
            .filter(|s| s.is_well_formed())
            .collect();
        slots.sort_by(|a, b| a.open.cmp(&b.open));

        if slots.iter().any(|s| s.open >= s.close) {
            errors.insert(day, DayError::InvalidRange);
            continue;
        }
        for pair in slots.windows(2) {
            if pair[0].close > pair[1].open {
                errors.insert(day, DayError::Overlap);
                break;
            }
        }
    }

    errors
}

/// Deterministic serialization used to detect semantic schedule equality
///
/// Slots render as `open-close` joined by `|` within a day; days join with
/// `;` in Monday-first order. Two schedules with equal interval values per
/// day produce equal keys regardless of how they were built.
pub fn canonical_key(schedule: &WeeklySchedule) -> String {
    DayKey::ALL
        .iter()
        .map(|&day| {
            schedule
                .day(day)
                .iter()
                .map(|s| format!("{}-{}", s.open, s.close))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Append a new interval to a day, up to `max_slots`
///
/// The new slot opens at the previous slot's closing time and closes three
/// hours later (wrapping at midnight); an empty day gets the 09:00-18:00
/// default. A malformed previous closing time also falls back to the
/// defaults. At the cap the schedule is returned unchanged.
pub fn add_interval(schedule: &WeeklySchedule, day: DayKey, max_slots: usize) -> WeeklySchedule {
    if schedule.day(day).len() >= max_slots {
        return schedule.clone();
    }

    let (open, close) = match schedule.day(day).last() {
        Some(last) => match add_minutes(&last.close, NEW_SLOT_SPAN_MINUTES) {
            Ok(close) => (last.close.clone(), close),
            Err(_) => (DEFAULT_OPEN_TIME.to_string(), DEFAULT_CLOSE_TIME.to_string()),
        },
        None => (DEFAULT_OPEN_TIME.to_string(), DEFAULT_CLOSE_TIME.to_string()),
    };

    let mut next = schedule.clone();
    next.day_mut(day).push(TimeInterval { open, close });
    next
}

/// Remove the interval at `index`; out-of-range indices no-op
pub fn remove_interval(schedule: &WeeklySchedule, day: DayKey, index: usize) -> WeeklySchedule {
    let mut next = schedule.clone();
    if index < next.day(day).len() {
        next.day_mut(day).remove(index);
    }
    next
}

/// Update one endpoint of one interval; out-of-range indices no-op
///
/// The value goes through lenient coercion first, so compact entries such as
/// `"900"` land as `"09:00"`.
pub fn set_interval_field(
    schedule: &WeeklySchedule,
    day: DayKey,
    index: usize,
    field: IntervalField,
    value: &str,
) -> WeeklySchedule {
    let mut next = schedule.clone();
    if let Some(slot) = next.day_mut(day).get_mut(index) {
        let coerced = coerce_time(value);
        match field {
            IntervalField::Open => slot.open = coerced,
            IntervalField::Close => slot.close = coerced,
        }
    }
    next
}

/// Mark a day as closed
pub fn clear_day(schedule: &WeeklySchedule, day: DayKey) -> WeeklySchedule {
    let mut next = schedule.clone();
    next.day_mut(day).clear();
    next
}

/// Copy one day's intervals over each target day
///
/// Targets receive independent deep copies; mutating a target afterwards
/// never affects the source day.
pub fn copy_day(schedule: &WeeklySchedule, from: DayKey, targets: &[DayKey]) -> WeeklySchedule {
    let mut next = schedule.clone();
    let source = schedule.day(from).to_vec();
    for &target in targets {
        *next.day_mut(target) = source.clone();
    }
    next
}
