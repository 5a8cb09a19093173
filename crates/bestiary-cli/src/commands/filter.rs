use std::path::Path;

use bestiary_core::Condition;

pub fn run(
    file: &Path,
    conditions: &[String],
    matches: &[String],
    columns: &[String],
    limit: Option<usize>,
) -> Result<(), String> {
    let table = super::load_table(file)?;

    let mut query = table.query();
    for expr in conditions {
        query = query.condition(Condition::parse(expr).map_err(|e| e.to_string())?);
    }
    for arg in matches {
        let (column, pattern) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected COLUMN=PATTERN, got \"{arg}\""))?;
        query = query.matches(column.trim(), pattern);
    }
    if let Some(n) = limit {
        query = query.limit(n);
    }

    let results = query.execute().map_err(|e| e.to_string())?;
    if results.is_empty() {
        println!("  No rows found.");
        return Ok(());
    }

    let results = super::project(results, columns)?;
    println!("{}", super::render_table(&results));
    println!();
    println!("  {}", super::plural(results.len(), "row"));

    Ok(())
}
