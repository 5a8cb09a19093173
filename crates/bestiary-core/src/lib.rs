//! Core types for Bestiary: monster tables and the transforms charts consume.
//!
//! A [`Table`] is loaded from CSV (see [`load`]) and then fed through one of
//! the pure transforms: [`tabulate`] for bar and pie charts, [`extract`] for
//! box and violin charts, and [`hit_probability`] for d20 hit chances. None
//! of them depend on each other or on any rendering code.

/// Error types used throughout the crate.
pub mod error;
/// Frequency tabulation of categorical values.
pub mod frequency;
/// Regrouping numeric columns by category.
pub mod grouped;
/// d20 hit probability.
pub mod hit_chance;
/// CSV loading.
pub mod load;
/// Row filtering by condition and regular expression.
pub mod query;
/// Five-number summaries and histograms.
pub mod summary;
/// The in-memory table model.
pub mod table;

/// Re-export error types.
pub use error::{BestiaryError, BestiaryResult};
/// Re-export tabulation.
pub use frequency::{FrequencyEntry, tabulate, tabulate_column, tabulate_with_order};
/// Re-export regrouping.
pub use grouped::{CategorySeries, GroupedSeries, extract};
/// Re-export hit chance functions.
pub use hit_chance::{hit_chances, hit_probability, hit_probability_checked};
/// Re-export query types.
pub use query::{Condition, Operand, Operator, RowQuery};
/// Re-export summary types.
pub use summary::{Histogram, Summary};
/// Re-export table types.
pub use table::{Cell, Numeric, Row, Table};
