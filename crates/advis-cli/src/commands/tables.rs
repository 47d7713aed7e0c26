use advis_core::enums::TableKind;
use advis_data::{Cell, RawTable};
use serde::Serialize;

use crate::cli::subcommands::TablesCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, table, table_options};

const DEFAULT_SHOW_LIMIT: u32 = 20;

#[derive(Debug, Serialize)]
struct TableCount {
    table: TableKind,
    rows: usize,
}

#[derive(Debug, Serialize)]
struct TableListResponse {
    source: String,
    tables: Vec<TableCount>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TableShowResponse {
    table: TableKind,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    total_rows: usize,
}

/// Handle `advis tables`.
pub async fn handle(
    action: &TablesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TablesCommands::List => list(ctx, flags).await,
        TablesCommands::Show { table, limit } => show(table, *limit, ctx, flags),
    }
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tables = ctx.service.tables();
    tables.preload().await?;
    let response = TableListResponse {
        source: tables.describe_source(),
        tables: TableKind::ALL
            .into_iter()
            .map(|table| TableCount {
                table,
                rows: tables.row_count(table).unwrap_or(0),
            })
            .collect(),
    };
    output(&response, flags.format)
}

fn show(name: &str, limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind: TableKind = name.parse()?;
    let raw = ctx.service.tables().raw_table(kind)?;
    let limit = usize::try_from(limit.unwrap_or(DEFAULT_SHOW_LIMIT)).unwrap_or(usize::MAX);

    if flags.format == OutputFormat::Table {
        println!("{}", render_raw(&raw, limit));
        return Ok(());
    }

    let total_rows = raw.len();
    let response = TableShowResponse {
        table: raw.table,
        headers: raw.headers,
        rows: raw.rows.into_iter().take(limit).collect(),
        total_rows,
    };
    output(&response, flags.format)
}

/// Header-ordered table of the first `limit` rows.
fn render_raw(raw: &RawTable, limit: usize) -> String {
    let headers = raw.headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = raw
        .rows
        .iter()
        .take(limit)
        .map(|row| row.iter().map(cell_text).collect())
        .collect::<Vec<_>>();
    table::render_entity_table(&headers, &rows, table_options())
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Number(value) => value.to_string(),
        Cell::Text(text) => text.clone(),
        Cell::Empty => String::from("-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_render_keeps_header_order_and_limit() {
        let raw = RawTable::parse(
            TableKind::Courses,
            "course_id,dept,level,title\n101,CS,110,Intro\n102,MATH,,Calculus\n",
        )
        .unwrap();

        let rendered = render_raw(&raw, 1);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("course_id"));
        assert!(lines[0].trim_end().ends_with("title"));
        assert!(lines[2].contains("Intro"));
    }

    #[test]
    fn empty_cells_render_as_dash() {
        assert_eq!(cell_text(&Cell::Empty), "-");
        assert_eq!(cell_text(&Cell::Number(110.0)), "110");
        assert_eq!(cell_text(&Cell::Number(3.5)), "3.5");
    }
}
