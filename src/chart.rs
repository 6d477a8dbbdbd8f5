use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter;
use crate::record::{SalesRecord, Selection};

/// One aggregated `(date, product)` point of the sales-trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub product: String,
    pub total: f64,
}

/// Groups the fully filtered records into per-day, per-product totals.
///
/// Returns an empty series when no products are selected or when nothing
/// survives the filter; that is the "nothing to chart" signal, not an error.
/// Points come out ordered by date, then product.
pub fn build_chart_series(records: &[SalesRecord], selection: &Selection) -> Vec<ChartPoint> {
    if selection.products.is_empty() {
        return Vec::new();
    }

    let filtered = filter::apply(records, selection);

    let mut groups: BTreeMap<(NaiveDate, String), f64> = BTreeMap::new();
    for record in &filtered {
        *groups
            .entry((record.date, record.product.clone()))
            .or_insert(0.0) += record.gross_subtotal;
    }

    groups
        .into_iter()
        .map(|((date, product), total)| ChartPoint {
            date,
            product,
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, branch: &str, product: &str, customer: &str, amount: f64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            branch: branch.to_string(),
            product: product.to_string(),
            customer: customer.to_string(),
            gross_subtotal: amount,
        }
    }

    #[test]
    fn test_empty_without_product_selection() {
        let records = vec![record(1, "North", "Widget", "Acme", 100.0)];
        let selection = Selection {
            branches: vec!["North".to_string()],
            products: vec![],
            customers: vec!["Acme".to_string()],
        };

        assert!(build_chart_series(&records, &selection).is_empty());
    }

    #[test]
    fn test_empty_when_filter_matches_nothing() {
        let records = vec![record(1, "North", "Widget", "Acme", 100.0)];
        let selection = Selection {
            branches: vec!["South".to_string()],
            products: vec!["Widget".to_string()],
            customers: vec![],
        };

        assert!(build_chart_series(&records, &selection).is_empty());
    }

    #[test]
    fn test_groups_same_day_same_product() {
        let records = vec![
            record(1, "North", "Widget", "Acme", 100.0),
            record(1, "North", "Widget", "Beta", 25.0),
            record(2, "North", "Widget", "Acme", 10.0),
        ];
        let selection = Selection {
            branches: vec!["North".to_string()],
            products: vec!["Widget".to_string()],
            customers: vec![],
        };

        let points = build_chart_series(&records, &selection);
        assert_eq!(points.len(), 2);
        assert!((points[0].total - 125.0).abs() < f64::EPSILON);
        assert!((points[1].total - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_points_ordered_by_date_then_product() {
        let records = vec![
            record(2, "North", "Widget", "Acme", 1.0),
            record(1, "North", "Widget", "Acme", 2.0),
            record(1, "North", "Gadget", "Acme", 3.0),
        ];
        let selection = Selection {
            branches: vec!["North".to_string()],
            products: vec!["Widget".to_string(), "Gadget".to_string()],
            customers: vec![],
        };

        let points = build_chart_series(&records, &selection);
        let keys: Vec<(u32, &str)> = points
            .iter()
            .map(|p| (chrono::Datelike::day(&p.date), p.product.as_str()))
            .collect();
        assert_eq!(keys, vec![(1, "Gadget"), (1, "Widget"), (2, "Widget")]);
    }

    #[test]
    fn test_customer_selection_narrows_chart() {
        let records = vec![
            record(1, "North", "Widget", "Acme", 100.0),
            record(2, "North", "Widget", "Beta", 50.0),
        ];
        let selection = Selection {
            branches: vec!["North".to_string()],
            products: vec!["Widget".to_string()],
            customers: vec!["Acme".to_string()],
        };

        let points = build_chart_series(&records, &selection);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!((points[0].total - 100.0).abs() < f64::EPSILON);
    }
}
