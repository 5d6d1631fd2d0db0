use crate::index::types::{Entry, EntryId, Row, RowId, TableMeta};
use roaring::RoaringBitmap;

/// The loaded fragment table: immutable for the life of a page/session.
///
/// `rows` keeps generation order (the ranking tie-break); `order` holds the
/// same row ids sorted by fragment text, which makes every prefix a
/// contiguous run findable by binary search. Entries are interned, so two
/// rows produced by identical source records share an `EntryId`.
#[derive(Debug)]
pub struct IndexTable {
    entries: Vec<Entry>,
    rows: Vec<Row>,
    order: Vec<RowId>,
    meta: TableMeta,
}

impl IndexTable {
    pub(crate) fn new(entries: Vec<Entry>, rows: Vec<Row>, meta: TableMeta) -> Self {
        let mut order: Vec<RowId> = (0..rows.len() as RowId).collect();
        order.sort_unstable_by(|&a, &b| {
            rows[a as usize].fragment.cmp(&rows[b as usize].fragment)
        });
        Self {
            entries,
            rows,
            order,
            meta,
        }
    }

    /// Ids of all rows whose fragment starts with `prefix`, as a bitmap.
    ///
    /// Bitmap iteration yields ascending row ids, i.e. generation order.
    pub fn prefix_rows(&self, prefix: &str) -> RoaringBitmap {
        let start = self
            .order
            .partition_point(|&id| self.rows[id as usize].fragment.as_str() < prefix);

        let mut matched = RoaringBitmap::new();
        for &id in &self.order[start..] {
            if !self.rows[id as usize].fragment.starts_with(prefix) {
                break;
            }
            matched.insert(id);
        }
        matched
    }

    pub fn entry(&self, id: EntryId) -> &Entry {
        &self.entries[id as usize]
    }

    pub fn row(&self, id: RowId) -> &Row {
        &self.rows[id as usize]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn meta(&self) -> &TableMeta {
        &self.meta
    }
}
