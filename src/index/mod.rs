pub mod build;
pub mod key;
pub mod reader;
pub mod stats;
pub mod table;
pub mod types;
pub mod writer;

pub use reader::{LoadError, load_path};
pub use table::IndexTable;
pub use types::*;
