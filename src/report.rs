use crate::monthly::MonthlyTable;
use crate::summary::TotalsNode;

/// Formats a monetary amount the way the dashboard displays it: dollar sign,
/// thousands separators, rounded to whole units.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Renders the totals tree as a nested markdown bullet list, four spaces of
/// indent per drill-down level.
pub fn totals_to_markdown(totals: &[TotalsNode]) -> String {
    let mut output = String::new();

    for branch in totals {
        output.push_str(&format!(
            "* **Total sales {}:** {}\n",
            branch.label,
            format_amount(branch.total)
        ));

        for product in &branch.children {
            output.push_str(&format!(
                "    * **Total sales {} in {}:** {}\n",
                product.label,
                branch.label,
                format_amount(product.total)
            ));

            for customer in &product.children {
                output.push_str(&format!(
                    "        * **Total sales {} in {} in {}:** {}\n",
                    customer.label,
                    product.label,
                    branch.label,
                    format_amount(customer.total)
                ));
            }
        }
    }

    output
}

/// Renders the aligned monthly table as a month × branch CSV grid.
///
/// Branch columns follow the series map order. A branch with no sales in a
/// month gets a blank cell rather than a zero.
pub fn monthly_to_csv(table: &MonthlyTable) -> String {
    let mut output = String::new();

    output.push_str("Month");
    for branch in table.series.keys() {
        output.push_str(&format!(",{}", branch));
    }
    output.push('\n');

    for month in &table.months {
        output.push_str(month);
        for buckets in table.series.values() {
            match buckets.get(month) {
                Some(total) => output.push_str(&format!(",{:.2}", total)),
                None => output.push(','),
            }
        }
        output.push('\n');
    }

    output
}
