use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(file: &Path, seed: Option<u64>, columns: &[String]) -> Result<(), String> {
    let table = super::project(super::load_table(file)?, columns)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let row = table
        .random_row(&mut rng)
        .ok_or_else(|| "table has no rows".to_string())?;

    let width = table
        .column_names()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);

    println!("  {} {}", "row".bold(), row.index());
    println!();
    for (column, cell) in row.iter() {
        let column = format!("{column:<width$}");
        println!("  {}  {}", column.dimmed(), cell);
    }

    Ok(())
}
