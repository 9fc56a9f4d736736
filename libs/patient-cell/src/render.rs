use std::io::{self, Write};

use serde_json::Value;
use tracing::warn;

/// Columns shown first, in this order, when present in the records.
const PREFERRED_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "age",
    "gender",
    "blood_type",
    "contact_phone",
    "contact_email",
    "Medical_History",
    "doctor_assigned",
];

/// Where the dashboard reports results.
pub trait Renderer {
    fn success(&mut self, message: &str);

    /// Blocking problem: the request was not sent.
    fn warning(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Non-blocking hint shown while a form is being filled in.
    fn advisory(&mut self, message: &str) {
        self.error(message);
    }

    fn table(&mut self, records: &[Value]);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn success(&mut self, message: &str) {
        self.line(&format!("✅ {}", message));
    }

    fn warning(&mut self, message: &str) {
        self.line(&format!("⚠️ {}", message));
    }

    fn error(&mut self, message: &str) {
        self.line(&format!("❌ {}", message));
    }

    fn advisory(&mut self, message: &str) {
        self.line(&format!("   ↳ {}", message));
    }

    fn table(&mut self, records: &[Value]) {
        let text = match self.format {
            OutputFormat::Table => format_table(records),
            OutputFormat::Json => serde_json::to_string_pretty(records)
                .unwrap_or_else(|e| format!("<unprintable records: {}>", e)),
        };
        self.line(text.trim_end());
    }
}

/// Column order: known patient fields first, then any others alphabetically.
pub fn table_columns(records: &[Value]) -> Vec<String> {
    let mut extra: Vec<String> = records
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|record| record.keys())
        .filter(|key| !PREFERRED_COLUMNS.contains(&key.as_str()))
        .cloned()
        .collect();
    extra.sort();
    extra.dedup();

    PREFERRED_COLUMNS
        .iter()
        .filter(|column| {
            records
                .iter()
                .filter_map(Value::as_object)
                .any(|record| record.contains_key(**column))
        })
        .map(|column| column.to_string())
        .chain(extra)
        .collect()
}

pub fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| format_cell(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

/// Renders records as a left-aligned text table.
pub fn format_table(records: &[Value]) -> String {
    if records.is_empty() {
        return "(no patients)".to_string();
    }

    let columns = table_columns(records);
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            if columns.is_empty() {
                // Not an object; show it whole
                return vec![format_cell(Some(record))];
            }
            columns
                .iter()
                .map(|column| format_cell(record.get(column.as_str())))
                .collect()
        })
        .collect();

    let header = if columns.is_empty() { vec!["value".to_string()] } else { columns };
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render_row(&header)];
    lines.push(
        widths.iter().map(|width| "-".repeat(*width)).collect::<Vec<_>>().join("-+-"),
    );
    lines.extend(rows.iter().map(|row| render_row(row)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_put_known_fields_first() {
        let records = vec![
            json!({"zeta": 1, "name": "Ada", "id": "P1"}),
            json!({"alpha": true, "age": 30}),
        ];
        assert_eq!(table_columns(&records), vec!["id", "name", "age", "alpha", "zeta"]);
    }

    #[test]
    fn test_cells_flatten_lists_and_nulls() {
        assert_eq!(format_cell(Some(&json!(["Flu", "Cold"]))), "Flu, Cold");
        assert_eq!(format_cell(Some(&json!(null))), "");
        assert_eq!(format_cell(None), "");
        assert_eq!(format_cell(Some(&json!(42))), "42");
    }

    #[test]
    fn test_table_layout() {
        let records = vec![
            json!({"id": "P1", "name": "Ada", "age": 36}),
            json!({"id": "P22", "name": "Grace Hopper", "age": 85}),
        ];
        let expected = [
            "id  | name         | age",
            "----+--------------+----",
            "P1  | Ada          | 36",
            "P22 | Grace Hopper | 85",
        ]
        .join("\n");

        assert_eq!(format_table(&records), expected);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[]), "(no patients)");
    }

    #[test]
    fn test_terminal_renderer_json_output() {
        let mut renderer = TerminalRenderer::new(Vec::new(), OutputFormat::Json);
        renderer.table(&[json!({"id": 1})]);
        renderer.success("done");

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.starts_with("[\n  {\n    \"id\": 1\n  }\n]\n"));
        assert!(output.ends_with("✅ done\n"));
    }

    #[test]
    fn test_terminal_advisory_is_indented_under_the_prompt() {
        let mut renderer = TerminalRenderer::new(Vec::new(), OutputFormat::Table);
        renderer.advisory("Please enter a name");
        renderer.warning("Please enter a name");

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "   ↳ Please enter a name\n⚠️ Please enter a name\n");
    }
}
