/// Columns never shrink below this many characters.
const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned plain-text table. Numeric cells are right-aligned; risk
/// tiers and failing grades are colored when `options.color` is set.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, is_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest column one character at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Wrap an already padded cell in an ANSI color chosen from its content.
fn colorize(cell: &str, padded: String) -> String {
    let code = match cell {
        "High" | "F" => "31",
        "Medium" | "D" | "D+" | "N/A" => "33",
        "Low" | "ok" => "32",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn numbers_align_right_and_text_left() {
        let rows = vec![vec![String::from("7"), String::from("Low")]];
        let table = render_entity_table(&["studentId", "riskTier"], &rows, PLAIN);
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with("        7"));
        assert!(row.ends_with("Low     "));
    }

    #[test]
    fn wide_columns_shrink_with_ellipsis() {
        let rows = vec![vec![
            String::from("1"),
            String::from("A very long course title that will not fit"),
        ]];
        let table = render_entity_table(
            &["id", "courseName"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 30);
        assert!(row.contains('…'));
    }

    #[test]
    fn risk_tiers_are_colored() {
        let rows = vec![vec![String::from("High")], vec![String::from("Biology")]];
        let table = render_entity_table(
            &["value"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[2].starts_with("\u{1b}[31m"));
        assert!(!lines[3].contains('\u{1b}'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec![String::from("1")]];
        let table = render_entity_table(&["id", "grade"], &rows, PLAIN);
        assert!(table.lines().nth(2).unwrap().trim_end().ends_with('-'));
    }
}
