mod day;
mod granularity;
mod interval;
mod report;
mod sale;
mod schedule;

pub use day::DayKey;
pub use granularity::Granularity;
pub use interval::TimeInterval;
pub use report::{AggregatedRow, RevenuePoint, SalesReport};
pub use sale::SaleRecord;
pub use schedule::WeeklySchedule;

/// Interval sequence for a single day (empty means closed)
pub type DayIntervals = Vec<TimeInterval>;
