use crate::models::{AggregatedRow, Granularity, RevenuePoint, SaleRecord, SalesReport};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

/// Category and date-range filters applied before aggregation
///
/// Absent fields mean no restriction; the date range is inclusive on both
/// ends.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SalesFilter {
    /// Allow-list of category labels
    pub categories: Option<Vec<String>>,

    /// Earliest date to include
    pub from: Option<NaiveDate>,

    /// Latest date to include
    pub to: Option<NaiveDate>,
}

impl SalesFilter {
    fn matches_category(&self, category: &str) -> bool {
        match &self.categories {
            Some(allowed) => allowed.iter().any(|c| c == category),
            None => true,
        }
    }

    fn matches_date(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

#[derive(Default)]
struct BucketAccumulator {
    counts: HashMap<String, u64>,
    total_count: u64,
    revenue: f64,
}

/// Service for aggregating sale records into reporting periods
pub struct SalesAggregator;

impl SalesAggregator {
    /// Aggregate sale records into chart-ready rows
    ///
    /// Records failing the filters are dropped, records with unparseable
    /// dates are skipped, and the survivors accumulate into one row per
    /// period. Rows and the revenue series come back in ascending bucket-key
    /// order; categories keep their first-seen order to drive stable stacked
    /// chart series.
    ///
    /// # Arguments
    /// * `records` - Full list of sale records
    /// * `granularity` - Week or month bucketing
    /// * `filter` - Category allow-list and inclusive date range
    ///
    /// # Returns
    /// The aggregated report; empty filtered input yields an empty report
    pub fn aggregate(
        records: &[SaleRecord],
        granularity: Granularity,
        filter: &SalesFilter,
    ) -> SalesReport {
        let mut categories: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut buckets: BTreeMap<String, BucketAccumulator> = BTreeMap::new();

        for record in records {
            if !filter.matches_category(&record.category) {
                continue;
            }
            let date = match record.calendar_date() {
                Ok(date) => date,
                Err(e) => {
                    warn!("Skipping sale record: {}", e);
                    continue;
                }
            };
            if !filter.matches_date(date) {
                continue;
            }

            if seen.insert(record.category.clone()) {
                categories.push(record.category.clone());
            }

            let entry = buckets
                .entry(Self::bucket_key(date, granularity))
                .or_default();
            *entry.counts.entry(record.category.clone()).or_insert(0) += 1;
            entry.total_count += 1;
            entry.revenue += record.amount;
        }

        debug!(
            "Aggregated {} records into {} {} buckets",
            records.len(),
            buckets.len(),
            granularity
        );

        let mut rows = Vec::with_capacity(buckets.len());
        let mut revenue_series = Vec::with_capacity(buckets.len());
        for (bucket, acc) in buckets {
            revenue_series.push(RevenuePoint {
                bucket: bucket.clone(),
                revenue: acc.revenue,
            });
            rows.push(AggregatedRow {
                bucket,
                counts: acc.counts,
                total_count: acc.total_count,
                revenue: acc.revenue,
            });
        }

        SalesReport {
            categories,
            rows,
            revenue_series,
        }
    }

    /// Bucket key for a date at the given granularity
    ///
    /// Week keys use the ISO week-year, which may differ from the calendar
    /// year near year boundaries; both key formats sort chronologically as
    /// plain strings.
    pub fn bucket_key(date: NaiveDate, granularity: Granularity) -> String {
        match granularity {
            Granularity::Week => Self::bucket_week(date),
            Granularity::Month => Self::bucket_month(date),
        }
    }

    /// ISO week key, `YYYY-Www`
    fn bucket_week(date: NaiveDate) -> String {
        let iso = date.iso_week();
        format!("{:04}-W{:02}", iso.year(), iso.week())
    }

    /// Calendar month key, `YYYY-MM`
    fn bucket_month(date: NaiveDate) -> String {
        format!("{:04}-{:02}", date.year(), date.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn october_sales() -> Vec<SaleRecord> {
        vec![
            SaleRecord::new("2025-10-01", "Mensile", 60.0),
            SaleRecord::new("2025-10-03", "Settimanale", 25.0),
        ]
    }

    #[test]
    fn test_week_aggregation_merges_one_week() {
        let report =
            SalesAggregator::aggregate(&october_sales(), Granularity::Week, &SalesFilter::default());

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.bucket, "2025-W40");
        assert_eq!(row.counts.get("Mensile"), Some(&1));
        assert_eq!(row.counts.get("Settimanale"), Some(&1));
        assert_eq!(row.total_count, 2);
        assert_eq!(row.revenue, 85.0);

        assert_eq!(report.revenue_series.len(), 1);
        assert_eq!(report.revenue_series[0].bucket, "2025-W40");
        assert_eq!(report.revenue_series[0].revenue, 85.0);
    }

    #[test]
    fn test_month_keys() {
        let report = SalesAggregator::aggregate(
            &october_sales(),
            Granularity::Month,
            &SalesFilter::default(),
        );
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].bucket, "2025-10");
    }

    #[test]
    fn test_rows_sort_by_bucket_regardless_of_input_order() {
        let records = vec![
            SaleRecord::new("2025-10-15", "Mensile", 60.0),
            SaleRecord::new("2025-10-01", "Mensile", 60.0),
            SaleRecord::new("2025-10-08", "Mensile", 60.0),
        ];
        let report =
            SalesAggregator::aggregate(&records, Granularity::Week, &SalesFilter::default());

        let keys: Vec<&str> = report.rows.iter().map(|r| r.bucket.as_str()).collect();
        assert_eq!(keys, vec!["2025-W40", "2025-W41", "2025-W42"]);
        let series: Vec<&str> = report
            .revenue_series
            .iter()
            .map(|p| p.bucket.as_str())
            .collect();
        assert_eq!(series, keys);
    }

    #[test]
    fn test_iso_week_year_boundaries() {
        let date = |s: &str| s.parse::<NaiveDate>().unwrap();
        // Dec 30 2024 falls in the week of 2025's first Thursday
        assert_eq!(
            SalesAggregator::bucket_key(date("2024-12-30"), Granularity::Week),
            "2025-W01"
        );
        // Jan 1 2027 still belongs to 2026's 53rd week
        assert_eq!(
            SalesAggregator::bucket_key(date("2027-01-01"), Granularity::Week),
            "2026-W53"
        );
        assert_eq!(
            SalesAggregator::bucket_key(date("2027-01-01"), Granularity::Month),
            "2027-01"
        );
    }

    #[test]
    fn test_totals_match_filtered_input() {
        let records = vec![
            SaleRecord::new("2025-09-29", "Mensile", 60.0),
            SaleRecord::new("2025-10-02", "Settimanale", 25.0),
            SaleRecord::new("2025-10-10", "Mensile", 60.0),
            SaleRecord::new("2025-10-10", "Giornaliero", 8.5),
        ];
        let report =
            SalesAggregator::aggregate(&records, Granularity::Week, &SalesFilter::default());

        let total: u64 = report.rows.iter().map(|r| r.total_count).sum();
        assert_eq!(total, records.len() as u64);

        let revenue: f64 = report.rows.iter().map(|r| r.revenue).sum();
        let expected: f64 = records.iter().map(|r| r.amount).sum();
        assert_eq!(revenue, expected);
    }

    #[test]
    fn test_category_filter() {
        let filter = SalesFilter {
            categories: Some(vec!["Mensile".to_string()]),
            ..SalesFilter::default()
        };
        let report = SalesAggregator::aggregate(&october_sales(), Granularity::Week, &filter);

        assert_eq!(report.categories, vec!["Mensile"]);
        assert_eq!(report.rows[0].total_count, 1);
        assert_eq!(report.rows[0].revenue, 60.0);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let date = |s: &str| s.parse::<NaiveDate>().unwrap();
        let filter = SalesFilter {
            from: Some(date("2025-10-01")),
            to: Some(date("2025-10-03")),
            ..SalesFilter::default()
        };
        let records = vec![
            SaleRecord::new("2025-09-30", "Mensile", 60.0),
            SaleRecord::new("2025-10-01", "Mensile", 60.0),
            SaleRecord::new("2025-10-03", "Mensile", 60.0),
            SaleRecord::new("2025-10-04", "Mensile", 60.0),
        ];
        let report = SalesAggregator::aggregate(&records, Granularity::Month, &filter);
        assert_eq!(report.rows[0].total_count, 2);
    }

    #[test]
    fn test_unparseable_dates_are_skipped() {
        let records = vec![
            SaleRecord::new("not-a-date", "Mensile", 60.0),
            SaleRecord::new("2025-10-01", "Mensile", 60.0),
        ];
        let report =
            SalesAggregator::aggregate(&records, Granularity::Week, &SalesFilter::default());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].total_count, 1);
    }

    #[test]
    fn test_empty_filtered_input_yields_empty_report() {
        let filter = SalesFilter {
            categories: Some(vec!["Annuale".to_string()]),
            ..SalesFilter::default()
        };
        let report = SalesAggregator::aggregate(&october_sales(), Granularity::Week, &filter);

        assert!(report.categories.is_empty());
        assert!(report.rows.is_empty());
        assert!(report.revenue_series.is_empty());
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let records = vec![
            SaleRecord::new("2025-10-03", "Settimanale", 25.0),
            SaleRecord::new("2025-10-01", "Mensile", 60.0),
            SaleRecord::new("2025-10-02", "Settimanale", 25.0),
        ];
        let report =
            SalesAggregator::aggregate(&records, Granularity::Week, &SalesFilter::default());
        assert_eq!(report.categories, vec!["Settimanale", "Mensile"]);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let records = october_sales();
        let first =
            SalesAggregator::aggregate(&records, Granularity::Week, &SalesFilter::default());
        let second =
            SalesAggregator::aggregate(&records, Granularity::Week, &SalesFilter::default());
        assert_eq!(first, second);
    }
}
