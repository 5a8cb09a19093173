use std::path::Path;

use bestiary_chart::{ChartStyle, box_chart, violin_chart};
use bestiary_core::{GroupedSeries, Summary};
use comfy_table::{ContentArrangement, Table};

use crate::GroupChart;

pub fn run(
    file: &Path,
    category: &str,
    numeric: &[String],
    chart: GroupChart,
    json: bool,
    style: &ChartStyle,
) -> Result<(), String> {
    let table = super::load_table(file)?;
    let columns: Vec<&str> = numeric.iter().map(String::as_str).collect();
    let grouped =
        bestiary_core::extract(&table, category, &columns).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&grouped).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for (i, series) in grouped.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match chart {
            GroupChart::Box => print!("{}", box_chart(series, style)),
            GroupChart::Violin => print!("{}", violin_chart(series, style)),
            GroupChart::Table => println!("{}", summary_table(category, series, style)),
        }
    }

    Ok(())
}

fn summary_table(category: &str, grouped: &GroupedSeries, style: &ChartStyle) -> Table {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec![
        category.to_string(),
        format!("{} n", grouped.column),
        "min".into(),
        "q1".into(),
        "median".into(),
        "q3".into(),
        "max".into(),
        "mean".into(),
    ]);
    for series in &grouped.series {
        let Some(s) = Summary::of(&series.values) else {
            continue;
        };
        out.add_row(vec![
            series.category.clone(),
            s.count.to_string(),
            style.number(s.min),
            style.number(s.q1),
            style.number(s.median),
            style.number(s.q3),
            style.number(s.max),
            style.number(s.mean),
        ]);
    }
    out
}
