use crate::index::key;
use crate::index::table::IndexTable;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Entry payload as serialized: `{"text": ..., "targets": [[url, ctx], ...]}`
#[derive(Serialize)]
struct RawEntry<'a> {
    text: &'a str,
    targets: Vec<(&'a str, &'a str)>,
}

/// Write a fragment table as a single JSON record array.
///
/// Rows go out in generation order with escaped keys; the ordinal appended
/// to each key is the row's index in this file, which keeps colliding
/// fragments unique on disk.
pub fn write_table(table: &IndexTable, path: &Path) -> Result<()> {
    let records: Vec<(String, RawEntry<'_>)> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(ordinal, row)| {
            let entry = table.entry(row.entry);
            let raw = RawEntry {
                text: &entry.display_text,
                targets: entry
                    .targets
                    .iter()
                    .map(|t| (t.url.as_str(), t.context.as_str()))
                    .collect(),
            };
            (key::encode_key(&row.fragment, ordinal), raw)
        })
        .collect();

    let file = File::create(path)
        .with_context(|| format!("failed to create table file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &records)
        .with_context(|| format!("failed to serialize table to {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
