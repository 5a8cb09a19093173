//! Error types for table operations.

/// Alias for `Result<T, BestiaryError>`.
pub type BestiaryResult<T> = Result<T, BestiaryError>;

/// Errors that can occur when loading or transforming a table.
#[derive(Debug, thiserror::Error)]
pub enum BestiaryError {
    /// The caller supplied a structurally wrong request, such as an
    /// unknown column or an explicit order of the wrong length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A cell that should be numeric holds a value that is present but
    /// cannot be read as a number.
    #[error("column \"{column}\", row {row}: cannot convert \"{value}\" to a number")]
    TypeConversion {
        /// The column being read.
        column: String,
        /// Zero-based row index of the offending cell.
        row: usize,
        /// The raw cell text.
        value: String,
    },

    /// A row filter pattern is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The CSV source could not be read or parsed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl BestiaryError {
    /// Shorthand for an unknown column error.
    pub(crate) fn unknown_column(name: &str) -> Self {
        Self::InvalidArgument(format!("unknown column: \"{name}\""))
    }
}
