//! Diff generation for audit logging
//!
//! Produces a one-line summary of the top-level fields that changed
//! between two JSON snapshots.

use serde_json::Value;

/// Describe the changes between two JSON values
///
/// Returns `None` when nothing differs.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 40 => {
            let truncated: String = s.chars().take(37).collect();
            format!("\"{}...\"", truncated)
        }
        Value::String(s) => format!("\"{}\"", s),
        // Transaction lists change on every ledger edit; only the size is useful
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"title": "Rent", "amount": 2000});
        let after = json!({"title": "Rent", "amount": 1500});

        assert_eq!(generate_diff(&before, &after).unwrap(), "amount: 2000 -> 1500");
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Alice"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"last_transaction_at": null, "old": 1});
        let after = json!({"last_transaction_at": "2026-01-01T00:00:00Z", "new": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: 1 -> (removed)"));
        assert!(diff.contains("new: (added) -> 2"));
        assert!(diff.contains("last_transaction_at: null"));
    }

    #[test]
    fn test_arrays_summarized() {
        let before = json!({"transactions": [1]});
        let after = json!({"transactions": [1, 2]});

        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "transactions: [1 items] -> [2 items]"
        );
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(60);
        let diff = generate_diff(&json!({"description": ""}), &json!({ "description": long }))
            .unwrap();
        assert!(diff.contains("...\""));
        assert!(diff.len() < 80);
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");
        assert!(generate_diff(&json!("a"), &json!("a")).is_none());
    }
}
