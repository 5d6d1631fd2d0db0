use ratatui::widgets::ListState;

use crate::index::IndexTable;
use crate::query::{QueryEngine, ResultItem};
use crate::session::{Debouncer, IncrementalSession};

/// One display row in the results pane.
///
/// Section headers live in the same list as the items under them so the
/// pane scrolls as one unit; selection only ever lands on items.
pub enum ListRow {
    Section(String),
    Item(ResultItem),
}

/// Application state
pub struct App {
    /// Search box contents, verbatim.
    pub query: String,
    /// Flattened result rows in display order.
    pub rows: Vec<ListRow>,
    /// List widget state; the selected index always points at an item row.
    pub list: ListState,
    pub status_message: String,
    session: IncrementalSession,
    debouncer: Debouncer,
    /// Status line shown while the search box is empty.
    summary: String,
}

impl App {
    pub fn new(table: IndexTable) -> Self {
        let summary = format!(
            "{} entries, {} rows. Enter prints the selected target; Esc clears.",
            table.entry_count(),
            table.row_count()
        );
        Self {
            query: String::new(),
            rows: Vec::new(),
            list: ListState::default(),
            status_message: summary.clone(),
            session: IncrementalSession::new(QueryEngine::new(table)),
            debouncer: Debouncer::default(),
            summary,
        }
    }

    /// Run the pending query once the debounce window elapses.
    /// Called on every pass of the event loop.
    pub fn tick(&mut self) {
        if self.debouncer.is_ready()
            && let Some(query) = self.debouncer.flush()
        {
            self.apply(&query);
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.debouncer.add(self.query.clone());
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.debouncer.add(self.query.clone());
        }
    }

    /// Delete word backward from the query (Ctrl+w).
    pub fn delete_word(&mut self) {
        while self.query.ends_with(' ') {
            self.query.pop();
        }
        while !self.query.is_empty() && !self.query.ends_with(' ') {
            self.query.pop();
        }
        self.debouncer.add(self.query.clone());
    }

    /// Clear the search box and show the idle screen immediately,
    /// skipping the debounce window.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.debouncer.clear();
        self.apply("");
    }

    pub fn select_next(&mut self) {
        let Some(current) = self.list.selected() else {
            return;
        };
        let next = self
            .rows
            .iter()
            .enumerate()
            .skip(current + 1)
            .find(|(_, row)| matches!(row, ListRow::Item(_)))
            .map(|(i, _)| i);
        if next.is_some() {
            self.list.select(next);
        }
    }

    pub fn select_prev(&mut self) {
        let Some(current) = self.list.selected() else {
            return;
        };
        let prev = self.rows[..current]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, row)| matches!(row, ListRow::Item(_)))
            .map(|(i, _)| i);
        if prev.is_some() {
            self.list.select(prev);
        }
    }

    pub fn selected_item(&self) -> Option<&ResultItem> {
        match self.rows.get(self.list.selected()?) {
            Some(ListRow::Item(item)) => Some(item),
            _ => None,
        }
    }

    /// Primary target URL of the selected result.
    pub fn activate(&self) -> Option<String> {
        self.selected_item()
            .and_then(|item| item.targets.first())
            .map(|target| target.url.clone())
    }

    fn apply(&mut self, raw: &str) {
        let groups = self.session.update(raw);

        self.rows.clear();
        let mut shown = 0;
        for group in groups {
            self.rows.push(ListRow::Section(group.label.clone()));
            for item in &group.items {
                self.rows.push(ListRow::Item(item.clone()));
                shown += 1;
            }
        }

        let first = self
            .rows
            .iter()
            .position(|row| matches!(row, ListRow::Item(_)));
        self.list = ListState::default().with_selected(first);

        self.status_message = if self.session.is_idle() {
            self.summary.clone()
        } else if shown == 0 {
            format!(
                "No matches for {:?}",
                self.session.query().unwrap_or_default()
            )
        } else {
            format!("{shown} matches")
        };
    }
}
