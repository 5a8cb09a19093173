//! Regrouping numeric columns by category.
//!
//! [`extract`] partitions a table by a categorical column and flattens each
//! requested numeric column into one [`CategorySeries`] per category, the
//! shape box and violin charts consume.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BestiaryResult;
use crate::table::Table;

/// The retained values of one numeric column within one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    /// The category label.
    pub category: String,
    /// Non-missing values in original row order.
    pub values: Vec<f64>,
}

impl CategorySeries {
    /// Create a series.
    pub fn new(category: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            category: category.into(),
            values,
        }
    }
}

/// All category series for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSeries {
    /// The numeric column these series were taken from.
    pub column: String,
    /// One series per category that retained at least one value.
    pub series: Vec<CategorySeries>,
}

impl GroupedSeries {
    /// Total number of values across all categories.
    pub fn value_count(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).sum()
    }

    /// Smallest and largest value across all categories.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Partition `table` by `category_column` and collect every column in
/// `numeric_columns` per category.
///
/// Categories appear in the order their first row appears. Rows with a
/// missing category belong to no group, so their values are not retained.
/// Missing numeric cells are dropped, and a category left with no values
/// is omitted from that column's result.
///
/// Fails with [`BestiaryError::InvalidArgument`] for an unknown column and
/// with [`BestiaryError::TypeConversion`] for a numeric cell that holds
/// non-numeric text, in any row, categorised or not.
///
/// [`BestiaryError::InvalidArgument`]: crate::BestiaryError::InvalidArgument
/// [`BestiaryError::TypeConversion`]: crate::BestiaryError::TypeConversion
pub fn extract(
    table: &Table,
    category_column: &str,
    numeric_columns: &[&str],
) -> BestiaryResult<Vec<GroupedSeries>> {
    let category_index = table.column_index(category_column)?;
    // Every requested column is read in full before any row is discarded.
    let columns = numeric_columns
        .iter()
        .map(|name| table.numeric_column(name))
        .collect::<BestiaryResult<Vec<_>>>()?;

    // Partition once: category labels in first-seen order with their rows.
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for row in table.rows() {
        let Some(label) = row.cells()[category_index].label() else {
            continue;
        };
        match positions.get(&label) {
            Some(&i) => groups[i].1.push(row.index()),
            None => {
                positions.insert(label.clone(), groups.len());
                groups.push((label, vec![row.index()]));
            }
        }
    }

    let mut result = Vec::with_capacity(numeric_columns.len());
    for (&name, column) in numeric_columns.iter().zip(&columns) {
        let series: Vec<CategorySeries> = groups
            .iter()
            .filter_map(|(category, rows)| {
                let values: Vec<f64> = rows.iter().filter_map(|&row| column[row]).collect();
                (!values.is_empty()).then(|| CategorySeries::new(category.clone(), values))
            })
            .collect();
        tracing::debug!(
            column = name,
            categories = series.len(),
            "grouped numeric column"
        );
        result.push(GroupedSeries {
            column: name.to_string(),
            series,
        });
    }
    Ok(result)
}
