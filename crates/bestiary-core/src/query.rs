use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{BestiaryError, BestiaryResult};
use crate::table::{Cell, Numeric, Row, Table};

/// A comparison operator in a row condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `==` or `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Operator {
    // Two-character operators first so `>=` is not read as `>`.
    const TOKENS: [(&'static str, Operator); 7] = [
        (">=", Operator::Ge),
        ("<=", Operator::Le),
        ("!=", Operator::Ne),
        ("==", Operator::Eq),
        (">", Operator::Gt),
        ("<", Operator::Lt),
        ("=", Operator::Eq),
    ];

    fn compare<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Eq => left == right,
            Self::Ne => left != right,
            Self::Lt => left < right,
            Self::Le => left <= right,
            Self::Gt => left > right,
            Self::Ge => left >= right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        };
        write!(f, "{s}")
    }
}

/// The right-hand side of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Compared numerically.
    Number(f64),
    /// Compared against the cell's display form.
    Text(String),
}

/// A single `column <op> value` predicate, such as `hp>100`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column the predicate reads.
    pub column: String,
    /// Comparison operator.
    pub op: Operator,
    /// Value to compare against.
    pub value: Operand,
}

impl Condition {
    /// Build a condition. Text operands only support `==` and `!=`.
    pub fn new(column: impl Into<String>, op: Operator, value: Operand) -> BestiaryResult<Self> {
        let column = column.into();
        if column.is_empty() {
            return Err(BestiaryError::InvalidArgument(
                "condition has no column name".into(),
            ));
        }
        if matches!(value, Operand::Text(_)) && !matches!(op, Operator::Eq | Operator::Ne) {
            return Err(BestiaryError::InvalidArgument(format!(
                "operator {op} needs a numeric value in condition on \"{column}\""
            )));
        }
        Ok(Self { column, op, value })
    }

    /// Parse `column<op>value`. Quoted values are always text; otherwise
    /// a value that parses as a number is numeric.
    pub fn parse(expr: &str) -> BestiaryResult<Self> {
        let (position, token, op) = expr
            .char_indices()
            .find_map(|(i, _)| {
                Operator::TOKENS
                    .iter()
                    .find(|(token, _)| expr[i..].starts_with(token))
                    .map(|&(token, op)| (i, token, op))
            })
            .ok_or_else(|| {
                BestiaryError::InvalidArgument(format!("no operator in condition \"{expr}\""))
            })?;

        let column = expr[..position].trim();
        let raw = expr[position + token.len()..].trim();
        let value = match unquote(raw) {
            Some(text) => Operand::Text(text.to_string()),
            None => match raw.parse::<f64>() {
                Ok(n) if !n.is_nan() => Operand::Number(n),
                _ => Operand::Text(raw.to_string()),
            },
        };
        Self::new(column, op, value)
    }

    /// Evaluate against one row. Missing cells never match.
    fn matches(&self, row: &Row<'_>, cell: &Cell) -> BestiaryResult<bool> {
        match &self.value {
            Operand::Number(target) => match cell.as_numeric() {
                Numeric::Present(v) => Ok(self.op.compare(&v, target)),
                Numeric::Missing => Ok(false),
                Numeric::Malformed(value) => Err(BestiaryError::TypeConversion {
                    column: self.column.clone(),
                    row: row.index(),
                    value: value.to_string(),
                }),
            },
            Operand::Text(target) => match cell.label() {
                Some(label) => Ok(self.op.compare(label.as_str(), target.as_str())),
                None => Ok(false),
            },
        }
    }
}

impl FromStr for Condition {
    type Err = BestiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn unquote(raw: &str) -> Option<&str> {
    ['"', '\'']
        .iter()
        .find_map(|&q| raw.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
}

/// A builder for filtering the rows of a table.
pub struct RowQuery<'t> {
    table: &'t Table,
    conditions: Vec<Condition>,
    patterns: Vec<(String, String)>,
    limit: Option<usize>,
    offset: usize,
}

impl<'t> RowQuery<'t> {
    /// Start a query that matches every row.
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            conditions: Vec::new(),
            patterns: Vec::new(),
            limit: None,
            offset: 0,
        }
    }

    /// Keep rows satisfying a condition (all conditions must hold).
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Keep rows whose `column` contains a match of the regular expression.
    pub fn matches(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.push((column.into(), pattern.into()));
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skip the first N results.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = n;
        self
    }

    /// Execute the query and return the matching rows in table order.
    pub fn execute(self) -> BestiaryResult<Table> {
        let indices = self.matching_indices()?;
        let indices: Vec<usize> = indices
            .into_iter()
            .skip(self.offset)
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();
        Ok(self.table.take_rows(&indices))
    }

    /// Count matching rows, ignoring limit and offset.
    pub fn count(self) -> BestiaryResult<usize> {
        Ok(self.matching_indices()?.len())
    }

    fn matching_indices(&self) -> BestiaryResult<Vec<usize>> {
        let conditions = self
            .conditions
            .iter()
            .map(|c| -> BestiaryResult<_> { Ok((self.table.column_index(&c.column)?, c)) })
            .collect::<BestiaryResult<Vec<_>>>()?;
        let patterns = self
            .patterns
            .iter()
            .map(|(column, pattern)| -> BestiaryResult<_> {
                Ok((self.table.column_index(column)?, Regex::new(pattern)?))
            })
            .collect::<BestiaryResult<Vec<_>>>()?;

        let mut indices = Vec::new();
        'rows: for row in self.table.rows() {
            for &(i, condition) in &conditions {
                if !condition.matches(&row, &row.cells()[i])? {
                    continue 'rows;
                }
            }
            for (i, regex) in &patterns {
                let hit = row.cells()[*i]
                    .label()
                    .is_some_and(|label| regex.is_match(&label));
                if !hit {
                    continue 'rows;
                }
            }
            indices.push(row.index());
        }

        tracing::debug!(
            conditions = conditions.len(),
            patterns = patterns.len(),
            matched = indices.len(),
            "row query"
        );
        Ok(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn test_table() -> Table {
        Table::new(["name", "size", "hp", "speed"])
            .unwrap()
            .with_rows([
                vec![text("Adult Red Dragon"), text("Huge"), Cell::Number(256.0), Cell::Number(40.0)],
                vec![text("Goblin"), text("Small"), Cell::Number(7.0), Cell::Number(30.0)],
                vec![text("Young Red Dragon"), text("Large"), Cell::Number(178.0), Cell::Missing],
                vec![text("Ghost"), text("Medium"), Cell::Missing, text("fly 40 ft.")],
            ])
            .unwrap()
    }

    fn names(table: &Table) -> Vec<String> {
        table
            .column("name")
            .unwrap()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn parse_numeric_conditions() {
        let c = Condition::parse("hp>100").unwrap();
        assert_eq!(c.column, "hp");
        assert_eq!(c.op, Operator::Gt);
        assert_eq!(c.value, Operand::Number(100.0));

        let c: Condition = " ac >= 15 ".parse().unwrap();
        assert_eq!(c.column, "ac");
        assert_eq!(c.op, Operator::Ge);

        assert_eq!(Condition::parse("cr!=0.5").unwrap().op, Operator::Ne);
        assert_eq!(Condition::parse("cr=1").unwrap().op, Operator::Eq);
    }

    #[test]
    fn parse_text_conditions() {
        let c = Condition::parse("size==Large").unwrap();
        assert_eq!(c.value, Operand::Text("Large".into()));

        let c = Condition::parse("name='10'").unwrap();
        assert_eq!(c.value, Operand::Text("10".into()));
    }

    #[test]
    fn parse_rejects_bad_conditions() {
        assert!(matches!(Condition::parse("hp"), Err(BestiaryError::InvalidArgument(_))));
        assert!(matches!(Condition::parse(">5"), Err(BestiaryError::InvalidArgument(_))));
        assert!(matches!(
            Condition::parse("size>Large"),
            Err(BestiaryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn filter_by_condition() {
        let table = test_table();
        let result = table
            .query()
            .condition(Condition::parse("hp>100").unwrap())
            .execute()
            .unwrap();
        assert_eq!(names(&result), ["Adult Red Dragon", "Young Red Dragon"]);
    }

    #[test]
    fn conditions_combine() {
        let table = test_table();
        let result = table
            .query()
            .condition(Condition::parse("hp>100").unwrap())
            .condition(Condition::parse("size==Huge").unwrap())
            .execute()
            .unwrap();
        assert_eq!(names(&result), ["Adult Red Dragon"]);
    }

    #[test]
    fn filter_by_regex() {
        let table = test_table();
        let result = table.query().matches("name", "^(Adult|Young) Red").execute().unwrap();
        assert_eq!(result.len(), 2);

        let count = table.query().matches("name", "(?i)goblin").count().unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn regex_matches_number_display_form() {
        let table = test_table();
        let result = table.query().matches("hp", "^1\\d\\d$").execute().unwrap();
        assert_eq!(names(&result), ["Young Red Dragon"]);
    }

    #[test]
    fn missing_cells_never_match() {
        let table = test_table();
        let result = table
            .query()
            .condition(Condition::parse("hp<1000").unwrap())
            .execute()
            .unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn malformed_numeric_cell_fails() {
        let table = test_table();
        let err = table
            .query()
            .condition(Condition::parse("speed>=30").unwrap())
            .execute()
            .unwrap_err();
        assert!(matches!(err, BestiaryError::TypeConversion { row: 3, .. }));
    }

    #[test]
    fn bad_pattern_and_unknown_column() {
        let table = test_table();
        assert!(matches!(
            table.query().matches("name", "(").execute(),
            Err(BestiaryError::Pattern(_))
        ));
        assert!(matches!(
            table.query().matches("alignment", "evil").execute(),
            Err(BestiaryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn limit_and_offset() {
        let table = test_table();
        assert_eq!(table.query().limit(2).execute().unwrap().len(), 2);
        let page = table.query().offset(1).limit(1).execute().unwrap();
        assert_eq!(names(&page), ["Goblin"]);
    }
}
