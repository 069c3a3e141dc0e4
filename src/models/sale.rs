use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single sale record supplied by the caller
///
/// The date stays a string at this boundary: records arrive from an external
/// ledger and may carry unparseable dates, which aggregation skips rather
/// than rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Calendar date in `YYYY-MM-DD` format
    pub date: String,

    /// Plan or product category label (e.g. "Mensile")
    pub category: String,

    /// Amount paid, in euro
    pub amount: f64,
}

impl SaleRecord {
    /// Create a new sale record
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }

    /// Parse the record's calendar date
    ///
    /// # Returns
    /// The parsed date, or a parse error for anything that is not a valid
    /// `YYYY-MM-DD` literal
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        self.date
            .parse()
            .map_err(|e| AppError::Parse(format!("invalid sale date '{}': {e}", self.date)))
    }
}
