use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of the sales ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,

    /// Branch that booked the sale. Never empty in a record set produced by
    /// [`crate::ingestion`]; rows without a branch are dropped there.
    pub branch: String,

    pub product: String,

    pub customer: String,

    /// Signed amount. Negative for credits and returns.
    pub gross_subtotal: f64,
}

/// User-chosen filter criteria for one summary invocation.
///
/// Each list keeps the order the values were picked in; that order is also the
/// drill-down emission order in the totals tree. An empty `products` or
/// `customers` list means "no drill-down at that level", not "match nothing".
/// `branches` must hold at least one entry by the time the summarizer facade
/// runs; the core functions document the same precondition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub branches: Vec<String>,
    pub products: Vec<String>,
    pub customers: Vec<String>,
}

/// Distinct dimension values present in a record set, in first-appearance
/// order. This is what a presentation layer offers in its filter pickers when
/// assembling a [`Selection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionValues {
    pub branches: Vec<String>,
    pub products: Vec<String>,
    pub customers: Vec<String>,
}

impl DimensionValues {
    pub fn collect(records: &[SalesRecord]) -> Self {
        let mut values = Self::default();
        for record in records {
            push_unique(&mut values.branches, &record.branch);
            push_unique(&mut values.products, &record.product);
            push_unique(&mut values.customers, &record.customer);
        }
        values
    }
}

fn push_unique(seen: &mut Vec<String>, value: &str) {
    if !seen.iter().any(|v| v == value) {
        seen.push(value.to_string());
    }
}
