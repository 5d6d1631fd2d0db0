//! Result ordering.
//!
//! Three keys, applied in order: entries with a fragment equal to the whole
//! query come first, then shorter display names, then earlier generation.
//! The key tuple is a total order, so output is deterministic for any input
//! permutation.

use crate::index::table::IndexTable;
use crate::index::types::{EntryId, RowId};

/// A deduplicated match, one per entry, before grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub entry: EntryId,
    /// Earliest matching row; the entry's generation rank.
    pub first_row: RowId,
    /// Some matching row's fragment equals the normalized query.
    pub exact: bool,
}

/// Sort candidates into final result order.
pub fn rank(candidates: &mut [Candidate], table: &IndexTable) {
    candidates.sort_by_cached_key(|c| {
        (
            !c.exact,
            table.entry(c.entry).display_text.chars().count(),
            c.first_row,
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::{Category, Entry, Row, TableMeta, Target};

    fn table_with_names(names: &[&str]) -> IndexTable {
        let entries = names
            .iter()
            .map(|name| Entry {
                display_text: name.to_string(),
                targets: vec![Target::new("page.html", "")],
                category: Category::Page,
            })
            .collect();
        // One row per entry, in entry order.
        let rows = names
            .iter()
            .enumerate()
            .map(|(i, name)| Row {
                fragment: name.to_lowercase(),
                entry: i as EntryId,
            })
            .collect();
        IndexTable::new(entries, rows, TableMeta::default())
    }

    fn candidate(entry: EntryId, first_row: RowId, exact: bool) -> Candidate {
        Candidate {
            entry,
            first_row,
            exact,
        }
    }

    #[test]
    fn test_exact_beats_shorter() {
        let table = table_with_names(&["Jo", "Jobs"]);
        let mut candidates = vec![candidate(0, 0, false), candidate(1, 1, true)];
        rank(&mut candidates, &table);
        assert_eq!(candidates[0].entry, 1);
    }

    #[test]
    fn test_shorter_display_beats_longer() {
        let table = table_with_names(&["JobEngineLong", "JobEng"]);
        let mut candidates = vec![candidate(0, 0, false), candidate(1, 1, false)];
        rank(&mut candidates, &table);
        assert_eq!(candidates[0].entry, 1);
    }

    #[test]
    fn test_generation_order_breaks_ties() {
        // Same length, same exactness.
        let table = table_with_names(&["Jobs", "Jabs"]);
        let mut candidates = vec![candidate(1, 1, false), candidate(0, 0, false)];
        rank(&mut candidates, &table);
        assert_eq!(candidates[0].first_row, 0);
        assert_eq!(candidates[1].first_row, 1);
    }

    #[test]
    fn test_rank_deterministic_across_permutations() {
        let table = table_with_names(&["Beta", "Alphabet", "Al"]);
        let mut a = vec![
            candidate(0, 0, false),
            candidate(1, 1, true),
            candidate(2, 2, false),
        ];
        let mut b = vec![a[2], a[0], a[1]];
        rank(&mut a, &table);
        rank(&mut b, &table);
        assert_eq!(a, b);
    }
}
