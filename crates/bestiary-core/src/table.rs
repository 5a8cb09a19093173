use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{BestiaryError, BestiaryResult};
use crate::query::RowQuery;

/// Raw field values that are read as a missing cell.
pub const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>", "#N/A",
];

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A numeric value.
    Number(f64),
    /// A non-numeric value.
    Text(String),
    /// An explicit absent value, distinct from every valid value.
    Missing,
}

/// The numeric reading of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<'a> {
    /// The cell holds a number.
    Present(f64),
    /// The cell is missing.
    Missing,
    /// The cell holds text that is not a number.
    Malformed(&'a str),
}

impl Cell {
    /// Classify a raw field: null markers become [`Cell::Missing`],
    /// parseable numbers become [`Cell::Number`], everything else is text.
    ///
    /// Surrounding whitespace is trimmed for every kind, so `"Large "` and
    /// `"Large"` are the same text and a text cell never holds a number.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if MISSING_MARKERS.contains(&trimmed) {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if !n.is_nan() => Self::Number(n),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    /// Returns true for [`Cell::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Read the cell as a number without coercing text.
    pub fn as_numeric(&self) -> Numeric<'_> {
        match self {
            Self::Number(n) => Numeric::Present(*n),
            Self::Missing => Numeric::Missing,
            Self::Text(s) => Numeric::Malformed(s),
        }
    }

    /// The display form of a present cell, `None` when missing.
    ///
    /// Labels are the category key used by tabulation and grouping, so
    /// cells with the same display form fall into the same category.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{n:.0}")
            }
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Missing => write!(f, "NA"),
        }
    }
}

/// An ordered collection of rows sharing one column set.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given column names.
    ///
    /// Fails with [`BestiaryError::InvalidArgument`] on a duplicate name.
    pub fn new<I, S>(columns: I) -> BestiaryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(BestiaryError::InvalidArgument(format!(
                    "duplicate column: \"{name}\""
                )));
            }
        }
        Ok(Self {
            columns,
            index,
            rows: Vec::new(),
        })
    }

    /// Append a row. Its length must match the column count.
    pub fn push_row(&mut self, cells: Vec<Cell>) -> BestiaryResult<()> {
        if cells.len() != self.columns.len() {
            return Err(BestiaryError::InvalidArgument(format!(
                "row {} has {} cells, expected {}",
                self.rows.len(),
                cells.len(),
                self.columns.len()
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Append every row from an iterator.
    pub fn with_rows<I>(mut self, rows: I) -> BestiaryResult<Self>
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        for row in rows {
            self.push_row(row)?;
        }
        Ok(self)
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the table has a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of a column, or [`BestiaryError::InvalidArgument`].
    pub fn column_index(&self, name: &str) -> BestiaryResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| BestiaryError::unknown_column(name))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by position.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            table: self,
            index,
            cells,
        })
    }

    /// Iterate over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(move |(index, cells)| Row {
            table: self,
            index,
            cells,
        })
    }

    /// Iterate over the cells of one column.
    pub fn column(&self, name: &str) -> BestiaryResult<impl Iterator<Item = &Cell>> {
        let i = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[i]))
    }

    /// Read a column as numbers, with `None` for missing cells.
    ///
    /// Fails with [`BestiaryError::TypeConversion`] on the first cell that
    /// is present but not numeric.
    pub fn numeric_column(&self, name: &str) -> BestiaryResult<Vec<Option<f64>>> {
        self.column(name)?
            .enumerate()
            .map(|(row, cell)| match cell.as_numeric() {
                Numeric::Present(n) => Ok(Some(n)),
                Numeric::Missing => Ok(None),
                Numeric::Malformed(value) => Err(BestiaryError::TypeConversion {
                    column: name.to_string(),
                    row,
                    value: value.to_string(),
                }),
            })
            .collect()
    }

    /// Project onto the given columns, in the given order.
    pub fn select(&self, columns: &[&str]) -> BestiaryResult<Table> {
        let positions = columns
            .iter()
            .map(|name| self.column_index(name))
            .collect::<BestiaryResult<Vec<_>>>()?;
        Table::new(columns.iter().copied())?.with_rows(
            self.rows
                .iter()
                .map(|row| positions.iter().map(|&i| row[i].clone()).collect()),
        )
    }

    /// A copy of this table holding only the rows at `indices`, in that order.
    pub fn take_rows(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            index: self.index.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }

    /// Start a row filter over this table.
    pub fn query(&self) -> RowQuery<'_> {
        RowQuery::new(self)
    }

    /// Pick a row uniformly at random.
    pub fn random_row(&self, rng: &mut StdRng) -> Option<Row<'_>> {
        if self.rows.is_empty() {
            return None;
        }
        self.row(rng.random_range(0..self.rows.len()))
    }
}

/// A borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'t> {
    table: &'t Table,
    index: usize,
    cells: &'t [Cell],
}

impl<'t> Row<'t> {
    /// Zero-based position of this row in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The cell in the named column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&'t Cell> {
        self.table.index.get(column).map(|&i| &self.cells[i])
    }

    /// All cells in column order.
    pub fn cells(&self) -> &'t [Cell] {
        self.cells
    }

    /// Iterate over `(column name, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'t str, &'t Cell)> {
        self.table
            .columns
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter())
    }
}
