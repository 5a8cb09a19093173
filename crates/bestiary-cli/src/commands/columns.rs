use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let table = super::load_table(file)?;

    for name in table.column_names() {
        println!("  {name}");
    }
    println!();
    println!(
        "  {}, {}",
        super::plural(table.column_names().len(), "column"),
        super::plural(table.len(), "row")
    );

    Ok(())
}
