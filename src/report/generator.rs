//! Plain-text report generation.
//!
//! Every outcome of a run, including the ones that end it early, is
//! rendered to a short block of text for standard output.

use crate::models::{CategoryOrder, CategoryTotals};
use crate::source::LoadError;

/// Message shown when the file holds no usable records.
pub const EMPTY_NOTICE: &str = "No expenses recorded yet.";

/// Header line printed above the category totals.
pub const SUMMARY_HEADER: &str = "Summary of expenses by category:";

/// Generate the category summary.
pub fn generate_summary(totals: &CategoryTotals, order: CategoryOrder) -> String {
    if totals.is_empty() {
        return format!("{}\n", EMPTY_NOTICE);
    }

    let mut output = String::new();
    output.push_str(SUMMARY_HEADER);
    output.push('\n');

    for (category, total) in totals.ordered(order) {
        output.push_str(&format!("  {}: {}\n", category, format_amount(total)));
    }

    output
}

/// Format a total with two decimals; NaN is written as `nan`.
fn format_amount(total: f64) -> String {
    if total.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", total)
    }
}

/// Generate the one-line notice for a file that could not be used.
pub fn generate_load_error(error: &LoadError, producer: &str) -> String {
    let filename = error.path().display();

    let line = match error {
        LoadError::Missing { .. } => format!(
            "No expenses file found at '{}'. Run the {} application first.",
            filename, producer
        ),
        LoadError::Read { source, .. } => format!("Failed to read {}: {}", filename, source),
        LoadError::Parse { source, .. } => format!("Failed to read {}: {}", filename, source),
        LoadError::NotAList { .. } => format!(
            "Unexpected data format in {} – expected a list of expenses.",
            filename
        ),
    };

    format!("{}\n", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn create_test_totals() -> CategoryTotals {
        let mut totals = CategoryTotals::new();
        totals.add("Food", 12.5);
        totals.add("Uncategorised", 3.0);
        totals.add("Food", 7.5);
        totals.add("Bills", 100.0 / 3.0);
        totals
    }

    #[test]
    fn test_generate_summary() {
        let output = generate_summary(&create_test_totals(), CategoryOrder::FirstSeen);

        assert_eq!(
            output,
            "Summary of expenses by category:\n  Food: 20.00\n  Uncategorised: 3.00\n  Bills: 33.33\n"
        );
    }

    #[test]
    fn test_generate_summary_alphabetical() {
        let output = generate_summary(&create_test_totals(), CategoryOrder::Alphabetical);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], SUMMARY_HEADER);
        assert_eq!(lines[1], "  Bills: 33.33");
        assert_eq!(lines[2], "  Food: 20.00");
        assert_eq!(lines[3], "  Uncategorised: 3.00");
    }

    #[test]
    fn test_generate_summary_special_totals() {
        let mut totals = CategoryTotals::new();
        totals.add("Refund", -0.0);
        totals.add("Unknown", f64::NAN);
        totals.add("Lottery", f64::INFINITY);
        totals.add("Debt", f64::NEG_INFINITY);

        let output = generate_summary(&totals, CategoryOrder::FirstSeen);

        assert_eq!(
            output,
            "Summary of expenses by category:\n  Refund: 0.00\n  Unknown: nan\n  Lottery: inf\n  Debt: -inf\n"
        );
    }

    #[test]
    fn test_generate_summary_empty() {
        let output = generate_summary(&CategoryTotals::new(), CategoryOrder::FirstSeen);
        assert_eq!(output, "No expenses recorded yet.\n");
    }

    #[test]
    fn test_generate_load_error_messages() {
        let missing = LoadError::Missing {
            path: PathBuf::from("expenses.txt"),
        };
        assert_eq!(
            generate_load_error(&missing, "Java"),
            "No expenses file found at 'expenses.txt'. Run the Java application first.\n"
        );

        let not_a_list = LoadError::NotAList {
            path: PathBuf::from("expenses.txt"),
        };
        assert_eq!(
            generate_load_error(&not_a_list, "Java"),
            "Unexpected data format in expenses.txt – expected a list of expenses.\n"
        );

        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let parse = LoadError::Parse {
            path: PathBuf::from("expenses.txt"),
            source,
        };
        assert!(generate_load_error(&parse, "Java").starts_with("Failed to read expenses.txt: "));
    }
}
