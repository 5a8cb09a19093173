//! Frequency tabulation of categorical values.
//!
//! Counts how often each label occurs and orders the result by descending
//! count. Ties keep the order in which labels were first seen, because the
//! counting pass records categories in encounter order and the sort is
//! stable.
//!
//! An explicit order is a permutation of that count-sorted list, given as
//! indices into it. It is not a mapping from category names, so a caller
//! must know the default order to build one.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{BestiaryError, BestiaryResult};
use crate::table::Table;

/// One category and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    /// The category label.
    pub category: String,
    /// How many input values carried this label.
    pub count: usize,
}

impl FrequencyEntry {
    /// Create an entry.
    pub fn new(category: impl Into<String>, count: usize) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }

    /// Fraction of `total` this entry accounts for (0 when `total` is 0).
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Count labels, most frequent first; ties by first encounter.
pub fn tabulate<I, S>(labels: I) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for label in labels {
        let label = label.as_ref();
        match positions.get(label) {
            Some(&i) => entries[i].count += 1,
            None => {
                positions.insert(label.to_string(), entries.len());
                entries.push(FrequencyEntry::new(label, 1));
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Count labels, then permute the count-sorted list by `order`.
///
/// `order[i]` is the index in the default list of the entry that should
/// appear at position `i`. It must name every default position exactly
/// once, otherwise the call fails with [`BestiaryError::InvalidArgument`].
pub fn tabulate_with_order<I, S>(labels: I, order: &[usize]) -> BestiaryResult<Vec<FrequencyEntry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries = tabulate(labels);
    reorder(entries, order)
}

/// Tabulate a table column. Missing cells are skipped and numbers are
/// labelled by their display form.
pub fn tabulate_column(
    table: &Table,
    column: &str,
    order: Option<&[usize]>,
) -> BestiaryResult<Vec<FrequencyEntry>> {
    let entries = tabulate(table.column(column)?.filter_map(|cell| cell.label()));
    tracing::debug!(column, categories = entries.len(), "tabulated column");
    match order {
        Some(order) => reorder(entries, order),
        None => Ok(entries),
    }
}

fn reorder(entries: Vec<FrequencyEntry>, order: &[usize]) -> BestiaryResult<Vec<FrequencyEntry>> {
    if order.len() != entries.len() {
        return Err(BestiaryError::InvalidArgument(format!(
            "explicit order has {} entries, expected {} (one per distinct category)",
            order.len(),
            entries.len()
        )));
    }

    let mut slots: Vec<Option<FrequencyEntry>> = entries.into_iter().map(Some).collect();
    let mut reordered = Vec::with_capacity(slots.len());
    for &index in order {
        let entry = slots
            .get_mut(index)
            .ok_or_else(|| {
                BestiaryError::InvalidArgument(format!(
                    "explicit order index {index} is out of range 0..{}",
                    order.len()
                ))
            })?
            .take()
            .ok_or_else(|| {
                BestiaryError::InvalidArgument(format!(
                    "explicit order repeats index {index}"
                ))
            })?;
        reordered.push(entry);
    }
    Ok(reordered)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::table::Cell;

    const SIZES: [&str; 5] = ["Large", "Medium", "Huge", "Medium", "Small"];

    #[test]
    fn count_descending_ties_by_first_encounter() {
        let entries = tabulate(SIZES);
        assert_eq!(
            entries,
            vec![
                FrequencyEntry::new("Medium", 2),
                FrequencyEntry::new("Large", 1),
                FrequencyEntry::new("Huge", 1),
                FrequencyEntry::new("Small", 1),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(tabulate(Vec::<String>::new()).is_empty());
        assert!(tabulate_with_order(Vec::<String>::new(), &[]).unwrap().is_empty());
    }

    #[test]
    fn explicit_order_permutes_default_list() {
        // default: Medium, Large, Huge, Small
        let entries = tabulate_with_order(SIZES, &[3, 1, 0, 2]).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(names, ["Small", "Large", "Medium", "Huge"]);
        assert_eq!(entries[2].count, 2);
    }

    #[test]
    fn explicit_order_length_mismatch() {
        let err = tabulate_with_order(SIZES, &[0, 1, 2]).unwrap_err();
        match err {
            BestiaryError::InvalidArgument(msg) => {
                assert!(msg.contains("has 3 entries"));
                assert!(msg.contains("expected 4"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn explicit_order_out_of_range() {
        let err = tabulate_with_order(SIZES, &[0, 1, 2, 4]).unwrap_err();
        assert!(matches!(err, BestiaryError::InvalidArgument(_)));
    }

    #[test]
    fn explicit_order_repeated_index() {
        let err = tabulate_with_order(SIZES, &[0, 1, 1, 2]).unwrap_err();
        assert!(matches!(err, BestiaryError::InvalidArgument(_)));
    }

    #[test]
    fn share_of_total() {
        let entry = FrequencyEntry::new("Medium", 2);
        assert!((entry.share(5) - 0.4).abs() < f64::EPSILON);
        assert!(entry.share(0).abs() < f64::EPSILON);
    }

    #[test]
    fn column_skips_missing_and_labels_numbers() {
        let table = Table::new(["size", "cr"])
            .unwrap()
            .with_rows([
                vec![Cell::Text("Large".into()), Cell::Number(2.0)],
                vec![Cell::Missing, Cell::Number(2.0)],
                vec![Cell::Text("Large".into()), Cell::Number(0.5)],
            ])
            .unwrap();

        let sizes = tabulate_column(&table, "size", None).unwrap();
        assert_eq!(sizes, vec![FrequencyEntry::new("Large", 2)]);

        let ratings = tabulate_column(&table, "cr", None).unwrap();
        assert_eq!(
            ratings,
            vec![FrequencyEntry::new("2", 2), FrequencyEntry::new("0.5", 1)]
        );

        assert!(matches!(
            tabulate_column(&table, "alignment", None),
            Err(BestiaryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn padded_fields_share_a_category() {
        let table = Table::new(["size"])
            .unwrap()
            .with_rows(["Large", "Large ", " Large", "Huge"].map(|raw| vec![Cell::parse(raw)]))
            .unwrap();

        let sizes = tabulate_column(&table, "size", None).unwrap();
        assert_eq!(
            sizes,
            vec![FrequencyEntry::new("Large", 3), FrequencyEntry::new("Huge", 1)]
        );
    }

    fn labels() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-e]", 0..60)
    }

    proptest! {
        #[test]
        fn counts_sum_to_input_length(xs in labels()) {
            let entries = tabulate(&xs);
            let total: usize = entries.iter().map(|e| e.count).sum();
            prop_assert_eq!(total, xs.len());
        }

        #[test]
        fn categories_are_unique(xs in labels()) {
            let entries = tabulate(&xs);
            let distinct: HashSet<&str> = entries.iter().map(|e| e.category.as_str()).collect();
            prop_assert_eq!(distinct.len(), entries.len());
        }

        #[test]
        fn counts_never_increase(xs in labels()) {
            let entries = tabulate(&xs);
            prop_assert!(entries.windows(2).all(|w| w[0].count >= w[1].count));
        }

        #[test]
        fn valid_permutation_is_a_bijection(
            (xs, order) in labels().prop_flat_map(|xs| {
                let k = tabulate(&xs).len();
                (Just(xs), Just((0..k).collect::<Vec<_>>()).prop_shuffle())
            })
        ) {
            let default = tabulate(&xs);
            let reordered = tabulate_with_order(&xs, &order).unwrap();
            prop_assert_eq!(reordered.len(), default.len());
            for (position, &index) in order.iter().enumerate() {
                prop_assert_eq!(&reordered[position], &default[index]);
            }
        }

        #[test]
        fn wrong_length_always_fails(xs in labels(), extra in 1usize..4) {
            let k = tabulate(&xs).len();
            let order: Vec<usize> = (0..k + extra).collect();
            prop_assert!(matches!(
                tabulate_with_order(&xs, &order),
                Err(BestiaryError::InvalidArgument(_))
            ));
        }
    }
}
