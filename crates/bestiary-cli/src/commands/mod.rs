pub mod columns;
pub mod count;
pub mod filter;
pub mod groups;
pub mod hit_chance;
pub mod random;

use std::path::Path;

use bestiary_core::Table;
use comfy_table::{ContentArrangement, Table as TextTable};

/// Load the CSV file every command works on.
fn load_table(file: &Path) -> Result<Table, String> {
    let table = bestiary_core::load::read_csv(file)
        .map_err(|e| format!("cannot load {}: {e}", file.display()))?;
    tracing::info!(
        path = %file.display(),
        rows = table.len(),
        columns = table.column_names().len(),
        "table loaded"
    );
    Ok(table)
}

/// Narrow a table to the requested columns; an empty request keeps all.
fn project(table: Table, columns: &[String]) -> Result<Table, String> {
    if columns.is_empty() {
        return Ok(table);
    }
    let names: Vec<&str> = columns.iter().map(|c| c.trim()).collect();
    table.select(&names).map_err(|e| e.to_string())
}

/// Render a table with comfy-table, truncating long cells.
fn render_table(table: &Table) -> TextTable {
    let mut out = TextTable::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(table.column_names());
    for row in table.rows() {
        out.add_row(row.cells().iter().map(|cell| truncate(&cell.to_string(), 40)));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        match word.strip_suffix('y') {
            Some(stem) => format!("{n} {stem}ies"),
            None => format!("{n} {word}s"),
        }
    }
}
