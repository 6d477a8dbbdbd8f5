use crate::record::{SalesRecord, Selection};

/// Narrows `records` to those matching `selection`.
///
/// A record is kept iff its branch is selected, and each of the customer and
/// product lists is either empty (no filtering at that level) or contains the
/// record's value. Input order is preserved, and an empty result is valid
/// output rather than an error. Applying the same selection twice yields the
/// same records as applying it once.
pub fn apply(records: &[SalesRecord], selection: &Selection) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| selection.branches.contains(&r.branch))
        .filter(|r| selection.customers.is_empty() || selection.customers.contains(&r.customer))
        .filter(|r| selection.products.is_empty() || selection.products.contains(&r.product))
        .cloned()
        .collect()
}
