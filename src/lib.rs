//! Core engines for the gym partner portal
//!
//! Two independent, pure-computation components back the portal's screens:
//!
//! - the opening-hours engine ([`services::opening_hours`] plus the stateful
//!   [`ScheduleEditor`]) normalizes, validates, and edits a weekly schedule,
//!   notifying collaborators only when the effective schedule changes;
//! - the sales aggregation engine ([`SalesAggregator`]) buckets sale records
//!   into ISO-week or calendar-month periods for reporting charts.
//!
//! Both operate synchronously on values passed in by the caller; persistence
//! and presentation live elsewhere.

pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, Result};
pub use models::{
    AggregatedRow, DayIntervals, DayKey, Granularity, RevenuePoint, SaleRecord, SalesReport,
    TimeInterval, WeeklySchedule,
};
pub use services::{
    canonical_key, normalize, normalize_json, validate, DayError, EditorConfig, IntervalField,
    SalesAggregator, SalesFilter, ScheduleChange, ScheduleEdit, ScheduleEditor, ValidationErrors,
};
