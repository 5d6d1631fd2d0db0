//! Incremental search sessions.
//!
//! A session wraps one [`QueryEngine`] and tracks the search box across
//! keystrokes. Each [`update`](IncrementalSession::update) replaces the
//! query wholesale (last write wins) and reuses previous work where the
//! row-set algebra allows: extending a query narrows the previous matched
//! set, shrinking one usually hits the row-set cache. Both shortcuts feed
//! the same ranking and grouping code as a full scan, so their output is
//! identical to one.

pub mod debounce;

pub use debounce::Debouncer;

use crate::query::{QueryEngine, ResultGroup};
use crate::utils::text;
use lru::LruCache;
use roaring::RoaringBitmap;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// How many query row sets to keep for backspace reuse.
const QUERY_CACHE_SIZE: usize = 64;

enum State {
    Idle,
    Querying {
        /// Normalized query.
        query: String,
        /// Matching row set. None after a caught engine failure, which
        /// keeps the next keystroke from narrowing a bad set.
        matched: Option<RoaringBitmap>,
        results: Vec<ResultGroup>,
    },
}

/// Keystroke-driven search state over one immutable table.
///
/// Loading a different table means building a new engine and a new
/// session; there is no in-place swap.
pub struct IncrementalSession {
    engine: QueryEngine,
    state: State,
    cache: LruCache<String, RoaringBitmap>,
}

impl IncrementalSession {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine,
            state: State::Idle,
            cache: LruCache::new(NonZeroUsize::new(QUERY_CACHE_SIZE).unwrap()),
        }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Feed the full current contents of the search box.
    ///
    /// Empty (or separator-only) input drops to idle. A query failure is
    /// logged and surfaces as empty results; the session stays usable.
    pub fn update(&mut self, raw: &str) -> &[ResultGroup] {
        let query = text::normalize(raw);
        if query.is_empty() {
            self.state = State::Idle;
            return &[];
        }

        let unchanged = matches!(
            &self.state,
            State::Querying { query: current, .. } if *current == query
        );
        if !unchanged {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                let matched = self.matched_rows(&query);
                let results = self.engine.results_for(&query, &matched);
                (matched, results)
            }));

            self.state = match outcome {
                Ok((matched, results)) => {
                    self.cache.put(query.clone(), matched.clone());
                    State::Querying {
                        query,
                        matched: Some(matched),
                        results,
                    }
                }
                Err(_) => {
                    error!(query = %query, "query execution panicked");
                    State::Querying {
                        query,
                        matched: None,
                        results: Vec::new(),
                    }
                }
            };
        }

        self.results()
    }

    /// Results for the current query (empty when idle).
    pub fn results(&self) -> &[ResultGroup] {
        match &self.state {
            State::Idle => &[],
            State::Querying { results, .. } => results,
        }
    }

    /// The current normalized query, if any.
    pub fn query(&self) -> Option<&str> {
        match &self.state {
            State::Idle => None,
            State::Querying { query, .. } => Some(query),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Back to idle and forget cached row sets.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.cache.clear();
    }

    /// Matching rows for `query`, cheapest source first: narrow the
    /// previous set when the query extends it, else reuse a cached set,
    /// else scan the table.
    fn matched_rows(&mut self, query: &str) -> RoaringBitmap {
        if let State::Querying {
            query: prev,
            matched: Some(matched),
            ..
        } = &self.state
            && query.starts_with(prev.as_str())
        {
            let table = self.engine.table();
            return matched
                .iter()
                .filter(|&id| table.row(id).fragment.starts_with(query))
                .collect();
        }

        if let Some(cached) = self.cache.get(query) {
            return cached.clone();
        }

        self.engine.table().prefix_rows(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build::{SourceEntry, build_table};

    fn engine() -> QueryEngine {
        let table = build_table(&[
            SourceEntry {
                text: "JobEngine".to_string(),
                targets: vec![("class_job_engine.html".to_string(), "Jobs".to_string())],
            },
            SourceEntry {
                text: "Job Handler".to_string(),
                targets: vec![("md_jobs.html#autotoc_md1".to_string(), String::new())],
            },
            SourceEntry {
                text: "jobs".to_string(),
                targets: vec![("md_jobs.html".to_string(), String::new())],
            },
            SourceEntry {
                text: "Jobs".to_string(),
                targets: vec![("namespace_jobs.html".to_string(), String::new())],
            },
            SourceEntry {
                text: "SharedCrt v2".to_string(),
                targets: vec![("md_shared.html".to_string(), String::new())],
            },
        ])
        .unwrap();
        QueryEngine::new(table)
    }

    fn session() -> IncrementalSession {
        IncrementalSession::new(engine())
    }

    #[test]
    fn test_update_matches_full_search() {
        let mut session = session();
        let fresh = engine();
        assert_eq!(session.update("job"), fresh.search("job").as_slice());
    }

    #[test]
    fn test_narrowing_equals_full_scan() {
        let mut session = session();
        let fresh = engine();
        for q in ["j", "jo", "job", "jobe", "joben"] {
            assert_eq!(session.update(q), fresh.search(q).as_slice(), "query {q:?}");
        }
    }

    #[test]
    fn test_backspace_equals_full_scan() {
        let mut session = session();
        let fresh = engine();
        for q in ["jobe", "job", "jo", "j"] {
            assert_eq!(session.update(q), fresh.search(q).as_slice(), "query {q:?}");
        }
    }

    #[test]
    fn test_replacement_equals_full_scan() {
        let mut session = session();
        let fresh = engine();
        session.update("job");
        assert_eq!(session.update("shared"), fresh.search("shared").as_slice());
    }

    #[test]
    fn test_mixed_script_settles_identically() {
        let mut session = session();
        let fresh = engine();
        let script = ["j", "jo", "job", "jo", "job h", "job ha", "", "s", "sh"];
        for q in script {
            assert_eq!(session.update(q), fresh.search(q).as_slice(), "query {q:?}");
        }
    }

    #[test]
    fn test_empty_input_goes_idle() {
        let mut session = session();
        session.update("job");
        assert!(!session.is_idle());
        assert!(session.update("").is_empty());
        assert!(session.is_idle());
        assert_eq!(session.query(), None);
    }

    #[test]
    fn test_whitespace_input_goes_idle() {
        let mut session = session();
        session.update("job");
        assert!(session.update("  /  ").is_empty());
        assert!(session.is_idle());
    }

    #[test]
    fn test_query_is_normalized() {
        let mut session = session();
        session.update("  Job/Engine  ");
        assert_eq!(session.query(), Some("job engine"));
    }

    #[test]
    fn test_same_query_is_stable() {
        let mut session = session();
        let first = session.update("jobs").to_vec();
        assert_eq!(session.update("jobs"), first.as_slice());
        assert_eq!(session.update("JOBS"), first.as_slice());
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        session.update("job");
        session.reset();
        assert!(session.is_idle());
        assert!(session.results().is_empty());
    }
}
