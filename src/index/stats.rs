use crate::index::reader::load_path;
use crate::index::types::Category;
use anyhow::Result;
use std::path::Path;

/// Display fragment table statistics
pub fn show_stats(path: &Path) -> Result<()> {
    let table = load_path(path)?;

    println!("Table Statistics");
    println!("================");
    println!();
    println!("Table path:       {}", path.display());
    println!("Shard files:      {}", table.meta().shard_files);
    println!("Source size:      {}", format_size(table.meta().source_bytes));
    println!("Rows:             {}", table.row_count());
    println!("Entries:          {}", table.entry_count());

    if let Some(longest) = table
        .rows()
        .iter()
        .max_by_key(|row| row.fragment.chars().count())
    {
        println!(
            "Longest fragment: {:?} ({} chars)",
            longest.fragment,
            longest.fragment.chars().count()
        );
    }

    // Count by category
    let mut counts: Vec<(Category, usize)> = Category::ALL
        .iter()
        .map(|&category| {
            let count = table
                .entries()
                .iter()
                .filter(|e| e.category == category)
                .count();
            (category, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    if !counts.is_empty() {
        println!();
        println!("Entries by category:");
        for (category, count) in counts {
            println!("  {:12} {}", category.label(), count);
        }
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
