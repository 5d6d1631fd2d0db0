use anyhow::Result;
use clap::{Parser, Subcommand};
use docsift::index::{build, load_path, stats, writer};
use docsift::output;
use docsift::query::QueryEngine;
use docsift::trace;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "Prefix search over generated documentation site indexes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fragment table from a source-entry listing
    Build {
        /// Source listing (JSON array of {"text", "targets"} records)
        source: PathBuf,

        /// Output table file
        #[arg(short, long, default_value = "searchdata.json")]
        output: PathBuf,
    },
    /// Run one query against a table
    Search {
        /// Query text
        query: String,

        /// Table file or shard directory
        #[arg(short, long, default_value = "searchdata.json")]
        table: PathBuf,

        /// Maximum results to print (0 = unlimited)
        #[arg(short, long, default_value_t = 25)]
        limit: usize,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show table statistics
    Stats {
        /// Table file or shard directory
        #[arg(default_value = "searchdata.json")]
        table: PathBuf,
    },
    /// Interactive incremental search
    #[cfg(feature = "interactive")]
    Tui {
        /// Table file or shard directory
        #[arg(default_value = "searchdata.json")]
        table: PathBuf,
    },
}

fn main() -> Result<()> {
    trace::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { source, output } => {
            let sources = build::read_source(&source)?;
            let table = build::build_table(&sources)?;
            writer::write_table(&table, &output)?;
            println!(
                "Wrote {} rows ({} entries) to {}",
                table.row_count(),
                table.entry_count(),
                output.display()
            );
        }
        Commands::Search {
            query,
            table,
            limit,
            no_color,
        } => {
            let table = load_path(&table)?;
            let engine = QueryEngine::new(table);
            let groups = engine.search(&query);
            output::print_results(&groups, !no_color, limit)?;
        }
        Commands::Stats { table } => {
            stats::show_stats(&table)?;
        }
        #[cfg(feature = "interactive")]
        Commands::Tui { table } => {
            docsift::tui::run(&table)?;
        }
    }

    Ok(())
}
