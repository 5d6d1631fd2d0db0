use serde::{Deserialize, Serialize};

/// Unique identifier for an interned entry
pub type EntryId = u32;

/// Unique identifier for an index row, in generation order
pub type RowId = u32;

/// One landing location: a page URL (with optional `#anchor`) plus the
/// human-readable context shown next to it when a name is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub url: String,
    pub context: String,
}

impl Target {
    pub fn new(url: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            context: context.into(),
        }
    }
}

/// Result category, derived from the shape of an entry's first target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Type,
    Namespace,
    Function,
    Member,
    Page,
    Heading,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Type,
        Category::Namespace,
        Category::Function,
        Category::Member,
        Category::Page,
        Category::Heading,
    ];

    /// Derive the category from a target URL.
    ///
    /// Anchored URLs point inside a page (members, functions, headings);
    /// bare URLs are the page itself (types, namespaces, documents). The
    /// page kind comes from the generated file name prefix.
    pub fn from_url(url: &str) -> Self {
        let (page, anchor) = match url.split_once('#') {
            Some((page, anchor)) => (page, Some(anchor)),
            None => (url, None),
        };
        let basename = page.rsplit('/').next().unwrap_or(page);

        match anchor {
            Some(anchor) => {
                if anchor.starts_with("autotoc") {
                    Category::Heading
                } else if is_record_page(basename) {
                    Category::Member
                } else if basename.starts_with("namespace") {
                    Category::Function
                } else if basename.starts_with("md") {
                    Category::Heading
                } else {
                    // File pages anchor free functions and macros.
                    Category::Function
                }
            }
            None => {
                if is_record_page(basename) {
                    Category::Type
                } else if basename.starts_with("namespace") {
                    Category::Namespace
                } else {
                    Category::Page
                }
            }
        }
    }

    /// Default section label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Type => "Classes",
            Category::Namespace => "Namespaces",
            Category::Function => "Functions",
            Category::Member => "Members",
            Category::Page => "Pages",
            Category::Heading => "Sections",
        }
    }
}

fn is_record_page(basename: &str) -> bool {
    basename.starts_with("class")
        || basename.starts_with("struct")
        || basename.starts_with("interface")
        || basename.starts_with("union")
}

/// An interned search entry: the display name and everywhere it lands.
///
/// Identity is `(display_text, targets)`; the category is derived from the
/// first target at load time and cached here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub display_text: String,
    pub targets: Vec<Target>,
    pub category: Category,
}

/// One index row: a fragment pointing at an entry
#[derive(Debug, Clone)]
pub struct Row {
    pub fragment: String,
    pub entry: EntryId,
}

/// Provenance recorded by the loader, reported by `stats`
#[derive(Debug, Clone, Default)]
pub struct TableMeta {
    pub shard_files: usize,
    pub source_bytes: u64,
}

/// One labeled result section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub category: Category,
    pub label: String,
}

/// Section order and labels for grouped results.
///
/// The order is fixed by configuration, never derived from the result set,
/// so the same categories always appear in the same place on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub sections: Vec<Section>,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            sections: Category::ALL
                .iter()
                .map(|&category| Section {
                    category,
                    label: category.label().to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_record_pages() {
        assert_eq!(
            Category::from_url("../class_job_engine.html"),
            Category::Type
        );
        assert_eq!(Category::from_url("struct_jobs.html"), Category::Type);
        assert_eq!(
            Category::from_url("../class_job_engine.html#a0b1c"),
            Category::Member
        );
    }

    #[test]
    fn test_category_namespace_pages() {
        assert_eq!(
            Category::from_url("../namespace_aws_iot.html"),
            Category::Namespace
        );
        assert_eq!(
            Category::from_url("../namespace_aws_iot.html#ab12f"),
            Category::Function
        );
    }

    #[test]
    fn test_category_doc_pages() {
        assert_eq!(Category::from_url("../md_docs_jobs.html"), Category::Page);
        assert_eq!(Category::from_url("index.html"), Category::Page);
        assert_eq!(
            Category::from_url("../md_docs_jobs.html#autotoc_md63"),
            Category::Heading
        );
        assert_eq!(
            Category::from_url("../class_x.html#autotoc_md9"),
            Category::Heading
        );
    }

    #[test]
    fn test_category_file_page_anchor() {
        assert_eq!(
            Category::from_url("../main_8cpp.html#a47c"),
            Category::Function
        );
    }

    #[test]
    fn test_default_section_order() {
        let config = SectionConfig::default();
        let order: Vec<_> = config.sections.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL);
        assert_eq!(config.sections[0].label, "Classes");
    }
}
