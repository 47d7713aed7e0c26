use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(match value {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => render_object_sections(&map),
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            table::render_entity_table(&headers, &rows, table_options())
        }
    })
}

/// Scalar fields as a key/value table, then one titled section per nested
/// object or array (`studentRows`, `pagination`, `courses`, ...).
fn render_object_sections(map: &Map<String, Value>) -> String {
    let mut sections = Vec::new();

    let scalars = map
        .iter()
        .filter(|(_, value)| !value.is_array() && !value.is_object())
        .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
        .collect::<Vec<_>>();
    if !scalars.is_empty() {
        sections.push(table::render_entity_table(
            &["key", "value"],
            &scalars,
            table_options(),
        ));
    }

    for (key, value) in map {
        let body = match value {
            Value::Array(items) => render_array_table(items),
            Value::Object(nested) => {
                let rows = nested
                    .iter()
                    .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                    .collect::<Vec<_>>();
                table::render_entity_table(&["key", "value"], &rows, table_options())
            }
            _ => continue,
        };
        sections.push(format!("{key}\n{body}"));
    }

    sections.join("\n\n")
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        student_id: u32,
        risk_tier: &'static str,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Page {
        total_students: u32,
        average_term_gpa: Option<f64>,
        student_rows: Vec<Row>,
    }

    fn sample() -> Page {
        Page {
            total_students: 2,
            average_term_gpa: None,
            student_rows: vec![
                Row {
                    student_id: 1,
                    risk_tier: "High",
                },
                Row {
                    student_id: 12,
                    risk_tier: "Low",
                },
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&sample(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["totalStudents"], 2);
        assert!(parsed["averageTermGpa"].is_null());
        assert_eq!(parsed["studentRows"][1]["studentId"], 12);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&sample(), OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["totalStudents"], 2);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_splits_scalars_and_nested_rows() {
        let out = render(&sample(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("totalStudents"));
        assert!(out.contains("studentRows"));
        assert!(out.lines().any(|line| line.contains("riskTier") && line.contains("studentId")));
        assert!(out.lines().any(|line| line.contains("High")));
    }

    #[test]
    fn table_render_of_empty_array_says_so() {
        let empty: Vec<Row> = Vec::new();
        let out = render(&empty, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["studentId", "name", "riskTier"];
        let rows = vec![
            vec!["1".to_string(), "Ada".to_string(), "Low".to_string()],
            vec![
                "12".to_string(),
                "Mateo Rossi".to_string(),
                "Medium".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("studentId"));
        assert!(lines[0].contains("riskTier"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[3].contains("Mateo Rossi"));
    }
}
