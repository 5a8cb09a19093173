use std::path::Path;

use bestiary_core::{hit_chances, hit_probability};
use comfy_table::{ContentArrangement, Table};

pub fn run_single(threshold: i32, modifier: i32) -> Result<(), String> {
    let chance = hit_probability(threshold, modifier);
    println!(
        "  d20 {modifier:+} vs {threshold}: {:.0}% to hit",
        chance * 100.0
    );
    Ok(())
}

pub fn run(
    file: &Path,
    column: &str,
    label: &str,
    modifier: i32,
    limit: Option<usize>,
) -> Result<(), String> {
    let table = super::load_table(file)?;
    let chances = hit_chances(&table, column, modifier).map_err(|e| e.to_string())?;
    let threshold_index = table.column_index(column).map_err(|e| e.to_string())?;
    let label_index = table.column_index(label).map_err(|e| e.to_string())?;

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec![label, column, "Hit chance"]);

    let mut shown = 0;
    for (row, chance) in table.rows().zip(&chances) {
        if limit.is_some_and(|n| shown >= n) {
            break;
        }
        let threshold = row.cells()[threshold_index].to_string();
        let chance = match chance {
            Some(p) => format!("{:.0}%", p * 100.0),
            None => "—".to_string(),
        };
        out.add_row(vec![
            row.cells()[label_index].to_string(),
            threshold,
            chance,
        ]);
        shown += 1;
    }

    println!("  d20 {modifier:+} against \"{column}\"");
    println!();
    println!("{out}");
    println!();
    println!("  {}", super::plural(shown, "row"));

    Ok(())
}
