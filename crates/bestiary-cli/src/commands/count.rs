use std::path::Path;

use bestiary_chart::{ChartStyle, bar_chart, pie_chart};
use comfy_table::{ContentArrangement, Table};

use crate::CountChart;

pub fn run(
    file: &Path,
    column: &str,
    order: Option<&[usize]>,
    chart: CountChart,
    json: bool,
    style: &ChartStyle,
) -> Result<(), String> {
    let table = super::load_table(file)?;
    let entries =
        bestiary_core::tabulate_column(&table, column, order).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&entries).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("  No values in column \"{column}\".");
        return Ok(());
    }

    match chart {
        CountChart::Bar => print!("{}", bar_chart(column, &entries, style)),
        CountChart::Pie => print!("{}", pie_chart(column, &entries, style)),
        CountChart::Table => {
            let total: usize = entries.iter().map(|e| e.count).sum();
            let mut out = Table::new();
            out.set_content_arrangement(ContentArrangement::Dynamic);
            out.set_header(vec![column, "Count", "Share"]);
            for entry in &entries {
                out.add_row(vec![
                    entry.category.clone(),
                    entry.count.to_string(),
                    format!("{}%", style.number(entry.share(total) * 100.0)),
                ]);
            }
            println!("{out}");
        }
    }
    println!();
    println!("  {}", super::plural(entries.len(), "category"));

    Ok(())
}
