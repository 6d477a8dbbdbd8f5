use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{SalesRecord, Selection};
use crate::utils::month_key;

/// Per-branch monthly sales aligned on a shared month axis.
///
/// `months` is the ascending, deduplicated union of every `YYYY-MM` key any
/// selected branch traded in. A branch/month pair with no transactions is
/// absent from `series` rather than present with zero; rendering decides
/// whether a gap stays a gap. A branch with no records at all has no key in
/// `series`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTable {
    pub months: Vec<String>,
    pub series: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Buckets each selected branch's sales by calendar month.
///
/// Only the branch dimension narrows the records here: the monthly trend of a
/// branch ignores any product/customer selection, matching the branch totals
/// in the hierarchical summary.
pub fn build_monthly(records: &[SalesRecord], selection: &Selection) -> MonthlyTable {
    let mut table = MonthlyTable::default();

    for branch in &selection.branches {
        let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
        for record in records.iter().filter(|r| &r.branch == branch) {
            *buckets.entry(month_key(record.date)).or_insert(0.0) += record.gross_subtotal;
        }
        if !buckets.is_empty() {
            table.series.insert(branch.clone(), buckets);
        }
    }

    let mut months: Vec<String> = table
        .series
        .values()
        .flat_map(|buckets| buckets.keys().cloned())
        .collect();
    months.sort();
    months.dedup();
    table.months = months;

    table
}
