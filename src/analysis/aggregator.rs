//! Expense aggregation.
//!
//! Records come from a file owned by another application, so each one is
//! decoded on its own and anything that does not fit is skipped without
//! stopping the pass.

use crate::models::{CategoryTotals, ExpenseRecord, SkipReason};
use serde_json::Value;
use tracing::debug;

/// Decode one raw record into an [`ExpenseRecord`].
///
/// A missing `category` resolves to `default_category` and a missing
/// `amount` to zero. A record that is not an object, has a non-text
/// category, or has an amount that cannot be converted is rejected.
pub fn decode_record(value: &Value, default_category: &str) -> Result<ExpenseRecord, SkipReason> {
    let fields = value
        .as_object()
        .ok_or_else(|| SkipReason::NotAnObject(json_kind(value)))?;

    let category = match fields.get("category") {
        None => default_category.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => return Err(SkipReason::InvalidCategory(json_kind(other))),
    };

    let amount = match fields.get("amount") {
        None => 0.0,
        Some(raw) => parse_amount(raw)?,
    };

    Ok(ExpenseRecord { category, amount })
}

/// Convert an `amount` value to a float.
///
/// Numeric strings are accepted with surrounding whitespace and with
/// underscores between digits, and booleans count as one and zero.
pub fn parse_amount(value: &Value) -> Result<f64, SkipReason> {
    let invalid = || SkipReason::InvalidAmount(value.to_string());

    match value {
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) => strip_digit_separators(s.trim())
            .and_then(|digits| digits.parse::<f64>().ok())
            .ok_or_else(invalid),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}

/// Sum amounts per category over all decodable records.
pub fn aggregate(records: &[Value], default_category: &str) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    let mut skipped = 0usize;

    for (index, raw) in records.iter().enumerate() {
        match decode_record(raw, default_category) {
            Ok(record) => totals.add(&record.category, record.amount),
            Err(reason) => {
                skipped += 1;
                debug!("Skipping record {}: {}", index, reason);
            }
        }
    }

    debug!(
        "Aggregated {} records into {} categories ({} skipped)",
        records.len() - skipped,
        totals.len(),
        skipped
    );

    totals
}

/// Remove `_` separators, each of which must sit between two digits.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());

    for (i, c) in s.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }

    Some(out)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
