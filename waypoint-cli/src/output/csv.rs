//! CSV output formatting for data export.

use super::Column;
use serde::Serialize;

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format rows as CSV with the given columns
    ///
    /// Each row is serialized and its fields picked out by column key.
    /// An empty slice still yields the header line.
    pub fn format_with_columns<T: Serialize>(data: &[T], columns: &[Column]) -> String {
        let headers: Vec<String> = columns
            .iter()
            .map(|c| Self::escape_value(&c.name))
            .collect();
        let mut output = headers.join(",");

        for item in data {
            let Ok(json) = serde_json::to_value(item) else {
                continue;
            };
            let row: Vec<String> = columns
                .iter()
                .map(|col| {
                    json.get(&col.key)
                        .map(Self::value_to_csv)
                        .unwrap_or_default()
                })
                .collect();
            output.push('\n');
            output.push_str(&row.join(","));
        }

        output
    }

    /// Convert a JSON value to a CSV cell
    fn value_to_csv(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => Self::escape_value(s),
            serde_json::Value::Array(arr) => Self::escape_value(&format!("[{} items]", arr.len())),
            serde_json::Value::Object(obj) => {
                Self::escape_value(&format!("{{{} fields}}", obj.len()))
            }
        }
    }

    /// Escape a string value for CSV
    ///
    /// Wraps in quotes if the value contains comma, newline, or quote.
    /// Doubles any existing quotes.
    fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('\n') || s.contains('\r') || s.contains('"') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
