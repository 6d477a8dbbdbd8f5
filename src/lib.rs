//! # Sales Summary Builder
//!
//! A library for summarizing a retail sales ledger across branches, products and
//! customers. One invocation produces hierarchical totals with a fixed drill-down
//! order, plus per-branch monthly trends aligned on a shared month axis and a
//! chart-ready per-day series.
//!
//! ## Core Concepts
//!
//! - **Sales record**: one ledger line with a date, a branch, a product, a customer
//!   and a signed gross subtotal
//! - **Selection**: the user's filter choices; the branch list drives everything, the
//!   product and customer lists are optional drill-downs
//! - **Totals tree**: branch → product → customer subtotals; a branch total always
//!   covers the whole branch regardless of drill-down selections
//! - **Monthly table**: per-branch month buckets on a shared, sorted month axis, with
//!   missing months left absent rather than zero-filled
//! - **Chart series**: the fully filtered records grouped into per-day, per-product
//!   totals
//!
//! ## Example
//!
//! ```rust,ignore
//! use sales_summary_builder::*;
//!
//! let records = load_ledger_file("sales.csv")?;
//! let selection = Selection {
//!     branches: vec!["HEAD OFFICE".to_string()],
//!     products: vec!["Widget".to_string()],
//!     customers: vec![],
//! };
//!
//! let report = summarize_sales(&records, &selection)?;
//! println!("{}", report::totals_to_markdown(&report.totals));
//! println!("{}", report::monthly_to_csv(&report.monthly));
//! ```

pub mod chart;
pub mod error;
pub mod filter;
pub mod ingestion;
pub mod monthly;
pub mod record;
pub mod report;
pub mod summary;
pub mod utils;

pub use chart::{build_chart_series, ChartPoint};
pub use error::{Result, SalesSummaryError};
pub use ingestion::{load_ledger_file, read_ledger_csv, RawLedgerRow};
pub use monthly::{build_monthly, MonthlyTable};
pub use record::{DimensionValues, SalesRecord, Selection};
pub use summary::{summarize, TotalsNode};
pub use utils::month_key;

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// The three independent outputs of one summary invocation, each consumed by
/// the presentation layer without further computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub totals: Vec<TotalsNode>,
    pub monthly: MonthlyTable,
    pub chart: Vec<ChartPoint>,
}

pub struct SalesSummarizer;

impl SalesSummarizer {
    /// Runs the full aggregation over `records` for one `selection`.
    ///
    /// The only rejected input is an empty branch list; everything else that
    /// fails to match simply produces empty output. The record set is
    /// borrowed and never mutated, so calls are independent and re-entrant.
    pub fn summarize(records: &[SalesRecord], selection: &Selection) -> Result<SalesReport> {
        if selection.branches.is_empty() {
            return Err(SalesSummaryError::EmptyBranchSelection);
        }

        info!(
            "Summarizing {} sales records across {} selected branches",
            records.len(),
            selection.branches.len()
        );
        debug!(
            "Selection drills down into {} products and {} customers",
            selection.products.len(),
            selection.customers.len()
        );

        Ok(SalesReport {
            totals: summary::summarize(records, selection),
            monthly: monthly::build_monthly(records, selection),
            chart: chart::build_chart_series(records, selection),
        })
    }
}

/// Convenience wrapper around [`SalesSummarizer::summarize`].
pub fn summarize_sales(records: &[SalesRecord], selection: &Selection) -> Result<SalesReport> {
    SalesSummarizer::summarize(records, selection)
}
