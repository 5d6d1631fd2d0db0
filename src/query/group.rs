//! Category sections.
//!
//! Ranked candidates are split into labeled sections whose order comes from
//! [`SectionConfig`], never from the result set, so a section never moves
//! around on screen as the query changes. Categories missing from the
//! config get a trailing section with the default label; results are never
//! dropped.

use crate::index::table::IndexTable;
use crate::index::types::{Category, SectionConfig, Target};
use crate::query::rank::Candidate;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub display_text: String,
    pub targets: Vec<Target>,
    pub category: Category,
    /// A whole fragment equaled the query, not just a prefix of one.
    pub exact: bool,
}

/// One labeled section of results, items in rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub label: String,
    pub category: Category,
    pub items: Vec<ResultItem>,
}

/// Split ranked candidates into sections; empty sections are omitted.
pub fn group(
    candidates: &[Candidate],
    table: &IndexTable,
    config: &SectionConfig,
) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = config
        .sections
        .iter()
        .map(|section| ResultGroup {
            label: section.label.clone(),
            category: section.category,
            items: Vec::new(),
        })
        .collect();

    for candidate in candidates {
        let entry = table.entry(candidate.entry);
        let pos = match groups.iter().position(|g| g.category == entry.category) {
            Some(pos) => pos,
            None => {
                groups.push(ResultGroup {
                    label: entry.category.label().to_string(),
                    category: entry.category,
                    items: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[pos].items.push(ResultItem {
            display_text: entry.display_text.clone(),
            targets: entry.targets.clone(),
            category: entry.category,
            exact: candidate.exact,
        });
    }

    groups.retain(|group| !group.items.is_empty());
    groups
}
