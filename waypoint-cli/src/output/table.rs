//! Table output formatting using the `tabled` crate
//!
//! Handles column widths, terminal width and alignment.

use super::{truncate, Alignment, Column, OutputConfig};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment as TabledAlignment, Modify, Width},
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Format rows as a table with the given columns
    pub fn format_with_columns<T: Serialize>(
        data: &[T],
        columns: &[Column],
        config: &OutputConfig,
    ) -> String {
        if data.is_empty() {
            return "(no results)".to_string();
        }

        let mut builder = Builder::default();

        let headers: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        builder.push_record(headers);

        // Serialize each item and extract values by key
        for item in data {
            let json = serde_json::to_value(item).unwrap_or_default();
            let row: Vec<String> = columns
                .iter()
                .map(|col| {
                    let value = json.get(&col.key).cloned().unwrap_or_default();
                    Self::format_value(&value, col, config)
                })
                .collect();
            builder.push_record(row);
        }

        let mut table = builder.build();

        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        for (i, col) in columns.iter().enumerate() {
            let alignment = match col.align {
                Alignment::Left => TabledAlignment::left(),
                Alignment::Right => TabledAlignment::right(),
            };
            table.with(Modify::new(Columns::single(i)).with(alignment));
        }

        if config.should_truncate() {
            table.with(Width::wrap(config.effective_width()));
        }

        table.to_string()
    }

    /// Format a single JSON value for display
    fn format_value(value: &serde_json::Value, col: &Column, config: &OutputConfig) -> String {
        let s = Self::value_to_string(value);

        match col.max_width {
            Some(max_width) if config.should_truncate() => truncate(&s, max_width),
            _ => s,
        }
    }

    /// Convert a JSON value to a display string
    fn value_to_string(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => "-".to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(arr) => format!("[{} items]", arr.len()),
            serde_json::Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        abbr: String,
        name: String,
        x: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                abbr: "BOS".to_string(),
                name: "Boston Red Sox".to_string(),
                x: 3.0,
            },
            Row {
                abbr: "NYY".to_string(),
                name: "New York Yankees".to_string(),
                x: 2.0,
            },
        ]
    }

    #[test]
    fn test_format_with_columns() {
        let columns = vec![
            Column::new("Abbr", "abbr"),
            Column::new("Name", "name"),
            Column::new("X", "x").with_alignment(Alignment::Right),
        ];
        let config = OutputConfig::new(OutputFormat::Table).without_truncation();
        let output = TableOutput::format_with_columns(&rows(), &columns, &config);

        assert!(output.contains("Abbr"));
        assert!(output.contains("Boston Red Sox"));
        assert!(output.contains("NYY"));
        assert!(output.contains("3.0"));
    }

    #[test]
    fn test_truncates_long_values() {
        let columns = vec![Column::new("Name", "name").with_max_width(8)];
        let config = OutputConfig::new(OutputFormat::Table).with_width(200);
        let output = TableOutput::format_with_columns(&rows(), &columns, &config);

        assert!(output.contains("Bosto..."));
        assert!(!output.contains("Boston Red Sox"));
    }

    #[test]
    fn test_empty_data() {
        let data: Vec<Row> = vec![];
        let columns = vec![Column::new("Abbr", "abbr")];
        let config = OutputConfig::new(OutputFormat::Table);

        let output = TableOutput::format_with_columns(&data, &columns, &config);
        assert_eq!(output, "(no results)");
    }
}
