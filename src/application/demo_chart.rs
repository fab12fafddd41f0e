//! Sample revenue data behind the landing page's interactive chart.

use serde::Serialize;

/// Filter value that matches every record.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesRecord {
    pub month: &'static str,
    pub revenue: u64,
    pub region: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalesSeries {
    pub items: Vec<SalesRecord>,
    pub total_revenue: u64,
}

const fn record(
    month: &'static str,
    revenue: u64,
    region: &'static str,
    category: &'static str,
) -> SalesRecord {
    SalesRecord {
        month,
        revenue,
        region,
        category,
    }
}

pub const SALES_DATA: [SalesRecord; 12] = [
    record("Jan", 45_000, "North", "Software"),
    record("Feb", 52_000, "North", "Software"),
    record("Mar", 48_000, "North", "Hardware"),
    record("Apr", 61_000, "South", "Software"),
    record("May", 55_000, "South", "Software"),
    record("Jun", 67_000, "South", "Hardware"),
    record("Jul", 58_000, "East", "Software"),
    record("Aug", 62_000, "East", "Software"),
    record("Sep", 71_000, "East", "Hardware"),
    record("Oct", 69_000, "West", "Software"),
    record("Nov", 73_000, "West", "Software"),
    record("Dec", 78_000, "West", "Hardware"),
];

fn matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None => true,
        Some(f) if f == ALL => true,
        Some(f) => f == value,
    }
}

/// Records matching both filters, in calendar order. `None` or `"all"`
/// disables a filter; matching is exact.
pub fn filter_sales(region: Option<&str>, category: Option<&str>) -> SalesSeries {
    let items: Vec<SalesRecord> = SALES_DATA
        .iter()
        .filter(|r| matches(region, r.region) && matches(category, r.category))
        .copied()
        .collect();
    let total_revenue = items.iter().map(|r| r.revenue).sum();
    SalesSeries {
        items,
        total_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_returns_whole_year() {
        let series = filter_sales(None, None);
        assert_eq!(series.items.len(), 12);
        assert_eq!(series.items[0].month, "Jan");
        assert_eq!(series.items[11].month, "Dec");
        assert_eq!(series.total_revenue, 739_000);
    }

    #[test]
    fn test_all_is_same_as_no_filter() {
        let series = filter_sales(Some(ALL), Some(ALL));
        assert_eq!(series.items.len(), 12);
    }

    #[test]
    fn test_region_filter() {
        let series = filter_sales(Some("East"), None);
        let months: Vec<_> = series.items.iter().map(|r| r.month).collect();
        assert_eq!(months, vec!["Jul", "Aug", "Sep"]);
        assert_eq!(series.total_revenue, 191_000);
    }

    #[test]
    fn test_region_and_category_filter() {
        let series = filter_sales(Some("West"), Some("Hardware"));
        assert_eq!(series.items.len(), 1);
        assert_eq!(series.items[0].month, "Dec");
        assert_eq!(series.total_revenue, 78_000);
    }

    #[test]
    fn test_category_filter() {
        let series = filter_sales(Some("all"), Some("Hardware"));
        let months: Vec<_> = series.items.iter().map(|r| r.month).collect();
        assert_eq!(months, vec!["Mar", "Jun", "Sep", "Dec"]);
    }

    #[test]
    fn test_unknown_value_yields_empty_series() {
        let series = filter_sales(Some("Central"), None);
        assert!(series.items.is_empty());
        assert_eq!(series.total_revenue, 0);

        // Matching is case-sensitive.
        assert!(filter_sales(Some("north"), None).items.is_empty());
    }
}
