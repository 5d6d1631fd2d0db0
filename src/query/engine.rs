//! Query execution.
//!
//! A query is one normalized string matched as a prefix against every
//! fragment in the table. Matching rows come back as a bitmap in
//! generation order; deduplication collapses them to one candidate per
//! entry before ranking and grouping.

use crate::index::table::IndexTable;
use crate::index::types::{EntryId, SectionConfig};
use crate::query::group::{self, ResultGroup};
use crate::query::rank::{self, Candidate};
use crate::utils::text;
use ahash::AHashMap;
use roaring::RoaringBitmap;
use std::collections::hash_map::Entry as Slot;

/// Read-only search over one loaded table.
///
/// The engine holds the table for its whole life; swapping tables means
/// building a new engine. Every method is a pure function of the table,
/// so repeated calls with the same query return identical results.
pub struct QueryEngine {
    table: IndexTable,
    config: SectionConfig,
}

impl QueryEngine {
    pub fn new(table: IndexTable) -> Self {
        Self::with_config(table, SectionConfig::default())
    }

    pub fn with_config(table: IndexTable, config: SectionConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &IndexTable {
        &self.table
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    /// Run a full search: normalize, scan, dedup, rank, group.
    ///
    /// Whitespace-only and punctuation-only input normalizes to the empty
    /// query, which matches nothing.
    pub fn search(&self, raw: &str) -> Vec<ResultGroup> {
        let query = text::normalize(raw);
        if query.is_empty() {
            return Vec::new();
        }
        let matched = self.table.prefix_rows(&query);
        self.results_for(&query, &matched)
    }

    /// Rank and group an already-matched row set.
    ///
    /// Shared by [`search`](Self::search) and session narrowing, which is
    /// what keeps the two paths byte-identical: given equal row sets they
    /// run exactly the same code from here on.
    pub(crate) fn results_for(&self, query: &str, matched: &RoaringBitmap) -> Vec<ResultGroup> {
        let mut candidates = self.collect_candidates(query, matched);
        rank::rank(&mut candidates, &self.table);
        group::group(&candidates, &self.table, &self.config)
    }

    /// One candidate per entry: first matching row fixes the generation
    /// rank, any matching row equal to the query marks it exact.
    fn collect_candidates(&self, query: &str, matched: &RoaringBitmap) -> Vec<Candidate> {
        let mut seen: AHashMap<EntryId, usize> = AHashMap::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        for row_id in matched {
            let row = self.table.row(row_id);
            let exact = row.fragment == query;
            match seen.entry(row.entry) {
                Slot::Occupied(slot) => {
                    if exact {
                        candidates[*slot.get()].exact = true;
                    }
                }
                Slot::Vacant(slot) => {
                    slot.insert(candidates.len());
                    candidates.push(Candidate {
                        entry: row.entry,
                        first_row: row_id,
                        exact,
                    });
                }
            }
        }
        candidates
    }
}
