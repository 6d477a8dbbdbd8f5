use serde::{Deserialize, Serialize};

use crate::record::{SalesRecord, Selection};

/// One node of the hierarchical branch → product → customer summary.
///
/// Built fresh per invocation and never mutated afterwards. `children` is
/// empty at a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsNode {
    pub label: String,
    pub total: f64,
    pub children: Vec<TotalsNode>,
}

/// Computes the fixed three-level drill-down, one root per selected branch in
/// `selection.branches` order.
///
/// A branch total always covers the whole branch; product and customer child
/// totals cover progressively narrower subsets. Sibling children do not
/// partition their parent's scope, so a parent's total is not the sum of its
/// children. Consumers rely on branch totals staying unconditional on the
/// product/customer selection.
///
/// With an empty `products` list no children are emitted at all: the nesting
/// order is fixed, so a customer selection alone has no effect on this output.
///
/// A dimension value with no matching records still emits its node, with a
/// total of 0.0.
pub fn summarize(records: &[SalesRecord], selection: &Selection) -> Vec<TotalsNode> {
    selection
        .branches
        .iter()
        .map(|branch| {
            let branch_records: Vec<&SalesRecord> =
                records.iter().filter(|r| &r.branch == branch).collect();

            let children = selection
                .products
                .iter()
                .map(|product| product_node(&branch_records, product, &selection.customers))
                .collect();

            TotalsNode {
                label: branch.clone(),
                total: sum_amounts(&branch_records),
                children,
            }
        })
        .collect()
}

fn product_node(
    branch_records: &[&SalesRecord],
    product: &str,
    customers: &[String],
) -> TotalsNode {
    let product_records: Vec<&SalesRecord> = branch_records
        .iter()
        .copied()
        .filter(|r| r.product == product)
        .collect();

    let children = customers
        .iter()
        .map(|customer| {
            let customer_records: Vec<&SalesRecord> = product_records
                .iter()
                .copied()
                .filter(|r| &r.customer == customer)
                .collect();

            TotalsNode {
                label: customer.clone(),
                total: sum_amounts(&customer_records),
                children: Vec::new(),
            }
        })
        .collect();

    TotalsNode {
        label: product.to_string(),
        total: sum_amounts(&product_records),
        children,
    }
}

fn sum_amounts(records: &[&SalesRecord]) -> f64 {
    records.iter().map(|r| r.gross_subtotal).sum()
}
