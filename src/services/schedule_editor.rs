use super::opening_hours::{
    add_interval, canonical_key, clear_day, copy_day, normalize, remove_interval,
    set_interval_field, validate, IntervalField, ValidationErrors,
};
use crate::constants::DEFAULT_MAX_SLOTS_PER_DAY;
use crate::models::{DayKey, WeeklySchedule};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Configuration for interactive schedule editing
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// Maximum number of intervals a single day may hold
    pub max_slots_per_day: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_slots_per_day: DEFAULT_MAX_SLOTS_PER_DAY,
        }
    }
}

/// One edit command against the current schedule
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleEdit {
    AddInterval {
        day: DayKey,
    },
    RemoveInterval {
        day: DayKey,
        index: usize,
    },
    SetField {
        day: DayKey,
        index: usize,
        field: IntervalField,
        value: String,
    },
    ClearDay {
        day: DayKey,
    },
    CopyDay {
        from: DayKey,
        targets: Vec<DayKey>,
    },
}

/// Notification emitted when the effective schedule changes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleChange {
    pub schedule: WeeklySchedule,
    pub errors: ValidationErrors,
}

/// Stateful editor over a weekly schedule
///
/// Holds the current schedule plus the canonical key of the last emitted
/// notification, so collaborators hear about a schedule exactly once per
/// effective change: no-op edits and re-syncs of semantically equal data
/// stay silent.
pub struct ScheduleEditor {
    schedule: WeeklySchedule,
    last_sent_key: String,
    config: EditorConfig,
}

impl ScheduleEditor {
    /// Create an editor from a raw stored value
    pub fn new(raw: &Value, config: EditorConfig) -> Self {
        Self {
            schedule: normalize(raw),
            last_sent_key: String::new(),
            config,
        }
    }

    /// Current schedule
    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Current validation state
    pub fn errors(&self) -> ValidationErrors {
        validate(&self.schedule)
    }

    /// Apply one edit command
    ///
    /// # Returns
    /// The change notification, or None when the edit left the effective
    /// schedule as last reported (cap reached, out-of-range index, or an
    /// edit reproducing the previous value)
    pub fn apply(&mut self, edit: ScheduleEdit) -> Option<ScheduleChange> {
        self.schedule = match edit {
            ScheduleEdit::AddInterval { day } => {
                add_interval(&self.schedule, day, self.config.max_slots_per_day)
            }
            ScheduleEdit::RemoveInterval { day, index } => {
                remove_interval(&self.schedule, day, index)
            }
            ScheduleEdit::SetField {
                day,
                index,
                field,
                value,
            } => set_interval_field(&self.schedule, day, index, field, &value),
            ScheduleEdit::ClearDay { day } => clear_day(&self.schedule, day),
            ScheduleEdit::CopyDay { from, targets } => {
                copy_day(&self.schedule, from, &targets)
            }
        };
        self.emit()
    }

    /// Re-seed from an external raw value
    ///
    /// Keeps the in-flight schedule when the incoming value is semantically
    /// equal, so a round-trip through storage does not clobber edits.
    pub fn sync(&mut self, raw: &Value) -> Option<ScheduleChange> {
        let incoming = normalize(raw);
        if canonical_key(&incoming) != canonical_key(&self.schedule) {
            self.schedule = incoming;
        }
        self.emit()
    }

    /// Emit the pending notification for a schedule not yet reported
    ///
    /// Idempotent: a second call without intervening changes returns None.
    pub fn flush(&mut self) -> Option<ScheduleChange> {
        self.emit()
    }

    fn emit(&mut self) -> Option<ScheduleChange> {
        let key = canonical_key(&self.schedule);
        if key == self.last_sent_key {
            debug!("Schedule unchanged, suppressing notification");
            return None;
        }
        self.last_sent_key = key;
        Some(ScheduleChange {
            schedule: self.schedule.clone(),
            errors: validate(&self.schedule),
        })
    }
}
