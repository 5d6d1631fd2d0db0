//! # docsift - documentation site search
//!
//! docsift is the query half of a documentation site's search box: it
//! loads the generated fragment table, answers prefix queries with ranked
//! and grouped results, and tracks the search box across keystrokes.
//!
//! ## Architecture
//!
//! - [`index`] - fragment table: building, loading, raw key codec
//! - [`query`] - search execution: matching, ranking, grouping
//! - [`session`] - keystroke-driven incremental search state
//! - [`output`] - one-shot result formatting
//! - [`tui`] - interactive terminal UI (feature `interactive`)
//! - [`utils`] - shared text normalization
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsift::index::load_path;
//! use docsift::query::QueryEngine;
//! use docsift::session::IncrementalSession;
//! use std::path::Path;
//!
//! let table = load_path(Path::new("searchdata.json")).unwrap();
//! let mut session = IncrementalSession::new(QueryEngine::new(table));
//!
//! // One call per keystroke; the whole box contents each time.
//! for group in session.update("jobe") {
//!     for item in &group.items {
//!         println!("{}: {}", group.label, item.display_text);
//!     }
//! }
//! ```
//!
//! ## Matching model
//!
//! The table maps lowercase *fragments* (word-boundary suffixes of every
//! display name) to entries. A query matches a row when it is a prefix of
//! the fragment, so matches always start at a word boundary: `jobe` finds
//! `JobEngine`, `obe` finds nothing. Fragments sort into one array and
//! every query becomes a binary search plus a contiguous scan; no I/O and
//! no allocation beyond the result set happens per query.

pub mod index;
pub mod output;
pub mod query;
pub mod session;
pub mod trace;
#[cfg(feature = "interactive")]
pub mod tui;
pub mod utils;
