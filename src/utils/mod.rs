//! Shared utilities.
//!
//! - [`text`] - word splitting, query normalization, boundary suffixes
//!
//! Fragment generation and query matching both normalize through here,
//! which is the invariant that makes a display name findable by itself:
//!
//! ```
//! use docsift::utils::text::{normalize, boundary_suffixes};
//!
//! let fragments = boundary_suffixes("Job Engine");
//! // ["job engine", "engine"]
//! assert_eq!(fragments[0], normalize("Job Engine"));
//! ```

pub mod text;

pub use text::*;
