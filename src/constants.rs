//! Schedule Editing Defaults
//!
//! Defaults applied when intervals are added to a weekly opening-hours
//! schedule interactively. The values match the partner portal's editing
//! table: at most 6 slots per day, with new slots opening at the previous
//! closing time and spanning three hours.

/// Maximum number of opening intervals a single day may hold
pub const DEFAULT_MAX_SLOTS_PER_DAY: usize = 6;

/// Opening time used for the first interval added to an empty day
pub const DEFAULT_OPEN_TIME: &str = "09:00";

/// Closing time used for the first interval added to an empty day
pub const DEFAULT_CLOSE_TIME: &str = "18:00";

/// Span of a newly appended interval, in minutes (3 hours)
pub const NEW_SLOT_SPAN_MINUTES: u32 = 180;

/// Minutes in a day; interval arithmetic wraps at this boundary
pub const MINUTES_PER_DAY: u32 = 24 * 60;
