pub mod opening_hours;
pub mod sales_report;
mod schedule_editor;

pub use opening_hours::{canonical_key, normalize, normalize_json, validate, DayError, IntervalField, ValidationErrors};
pub use sales_report::{SalesAggregator, SalesFilter};
pub use schedule_editor::{EditorConfig, ScheduleChange, ScheduleEdit, ScheduleEditor};
