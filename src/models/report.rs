use serde::Serialize;
use std::collections::HashMap;

/// One aggregated period of sales activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    /// Bucket key, `YYYY-Www` or `YYYY-MM`
    pub bucket: String,

    /// Sale counts per category within the bucket
    pub counts: HashMap<String, u64>,

    /// Total sale count within the bucket
    pub total_count: u64,

    /// Summed revenue within the bucket
    pub revenue: f64,
}

/// One point of the revenue line series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub bucket: String,
    pub revenue: f64,
}

/// Chart-ready aggregation result
///
/// `rows` and `revenue_series` are parallel sequences in ascending bucket-key
/// order; `categories` lists distinct category labels in first-seen order to
/// keep stacked chart series stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesReport {
    pub categories: Vec<String>,
    pub rows: Vec<AggregatedRow>,
    pub revenue_series: Vec<RevenuePoint>,
}
