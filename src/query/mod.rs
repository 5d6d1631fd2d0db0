pub mod engine;
pub mod group;
pub mod rank;

pub use engine::QueryEngine;
pub use group::{ResultGroup, ResultItem};
pub use rank::Candidate;
