use crate::index::key;
use crate::index::table::IndexTable;
use crate::index::types::{Category, Entry, EntryId, Row, TableMeta, Target};
use crate::utils::text;
use ahash::AHashMap;
use serde::Deserialize;
use serde_json::Value;
use std::collections::hash_map::Entry as Slot;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Error raised while loading a fragment table.
///
/// Loading is all-or-nothing: any of these means the table is unusable and
/// search stays disabled for the page. Query execution never reports them.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Table file or shard directory could not be read.
    Io { path: PathBuf, error: String },
    /// File contents are not a JSON record array.
    Parse { path: PathBuf, error: String },
    /// A record inside the array failed schema validation.
    Record {
        path: PathBuf,
        index: usize,
        reason: String,
    },
    /// Shard directory exists but holds no `.json` files.
    NoShards { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, error } => {
                write!(f, "failed to read {}: {}", path.display(), error)
            }
            Self::Parse { path, error } => {
                write!(f, "invalid table {}: {}", path.display(), error)
            }
            Self::Record {
                path,
                index,
                reason,
            } => {
                write!(f, "invalid record {} in {}: {}", index, path.display(), reason)
            }
            Self::NoShards { path } => {
                write!(f, "no .json shards in {}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// On-disk entry payload: `{"text": ..., "targets": [[url, context], ...]}`
#[derive(Deserialize)]
struct RawEntry {
    text: String,
    targets: Vec<(String, String)>,
}

/// Load a fragment table from a single `.json` file or a directory of
/// `.json` shards.
///
/// Shards load in lexicographic filename order, which is how the generator
/// numbers them, so row ids keep generation order across shard boundaries.
pub fn load_path(path: &Path) -> Result<IndexTable, LoadError> {
    let shards = collect_shards(path)?;

    let mut loader = Loader::default();
    let mut meta = TableMeta {
        shard_files: shards.len(),
        source_bytes: 0,
    };

    for shard in &shards {
        let contents = fs::read_to_string(shard).map_err(|e| LoadError::Io {
            path: shard.clone(),
            error: e.to_string(),
        })?;
        meta.source_bytes += contents.len() as u64;
        loader.add_shard(shard, &contents)?;
    }

    info!(
        rows = loader.rows.len(),
        entries = loader.entries.len(),
        shards = shards.len(),
        "loaded fragment table"
    );

    Ok(IndexTable::new(loader.entries, loader.rows, meta))
}

fn collect_shards(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut shards = Vec::new();
    let dir = fs::read_dir(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    for entry in dir {
        let entry = entry.map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        let shard = entry.path();
        if shard.extension().is_some_and(|ext| ext == "json") {
            shards.push(shard);
        }
    }

    if shards.is_empty() {
        return Err(LoadError::NoShards {
            path: path.to_path_buf(),
        });
    }
    shards.sort();
    Ok(shards)
}

/// Accumulates rows and interned entries across shards.
#[derive(Default)]
struct Loader {
    entries: Vec<Entry>,
    rows: Vec<Row>,
    interned: AHashMap<(String, Vec<Target>), EntryId>,
}

impl Loader {
    fn add_shard(&mut self, path: &Path, contents: &str) -> Result<(), LoadError> {
        let records: Vec<Value> =
            serde_json::from_str(contents).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        for (index, record) in records.into_iter().enumerate() {
            self.add_record(record).map_err(|reason| LoadError::Record {
                path: path.to_path_buf(),
                index,
                reason,
            })?;
        }
        Ok(())
    }

    fn add_record(&mut self, record: Value) -> Result<(), String> {
        let Value::Array(parts) = record else {
            return Err("record is not a [key, entry] pair".to_string());
        };
        let Ok([key, payload]) = <[Value; 2]>::try_from(parts) else {
            return Err("record is not a [key, entry] pair".to_string());
        };
        let Value::String(key) = key else {
            return Err("key is not a string".to_string());
        };

        let fragment =
            key::decode_key(&key).ok_or_else(|| format!("undecodable key `{key}`"))?;
        if fragment.is_empty() {
            return Err(format!("key `{key}` decodes to an empty fragment"));
        }
        // Stored fragments must be in query-normal form or no query can reach them.
        if text::normalize(&fragment) != fragment {
            return Err(format!("key `{key}` decodes to non-canonical text `{fragment}`"));
        }
        let raw: RawEntry = serde_json::from_value(payload).map_err(|e| e.to_string())?;

        if raw.text.is_empty() {
            return Err("empty display text".to_string());
        }
        if raw.targets.is_empty() {
            return Err("entry has no targets".to_string());
        }
        if raw.targets.iter().any(|(url, _)| url.is_empty()) {
            return Err("target with empty url".to_string());
        }

        let targets: Vec<Target> = raw
            .targets
            .into_iter()
            .map(|(url, context)| Target { url, context })
            .collect();
        let entry = self.intern(raw.text, targets);
        self.rows.push(Row { fragment, entry });
        Ok(())
    }

    /// Identical `(display_text, targets)` records share one entry id.
    fn intern(&mut self, display_text: String, targets: Vec<Target>) -> EntryId {
        match self.interned.entry((display_text, targets)) {
            Slot::Occupied(slot) => *slot.get(),
            Slot::Vacant(slot) => {
                let id = self.entries.len() as EntryId;
                let (display_text, targets) = slot.key().clone();
                let category = Category::from_url(&targets[0].url);
                self.entries.push(Entry {
                    display_text,
                    targets,
                    category,
                });
                slot.insert(id);
                id
            }
        }
    }
}
