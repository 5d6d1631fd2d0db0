//! Output formatting for one-shot search results

use crate::index::types::Target;
use crate::query::{ResultGroup, ResultItem};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print grouped results, sections in configured order.
///
/// `limit` caps the total item count across sections; 0 means unlimited.
pub fn print_results(groups: &[ResultGroup], color: bool, limit: usize) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if groups.is_empty() {
        return Ok(());
    }

    let total: usize = groups.iter().map(|g| g.items.len()).sum();
    let mut printed = 0usize;

    'sections: for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            writeln!(stdout)?;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(stdout, "{}", group.label)?;
        stdout.reset()?;

        for item in &group.items {
            if limit > 0 && printed >= limit {
                break 'sections;
            }
            print_item(&mut stdout, item)?;
            printed += 1;
        }
    }

    if printed < total {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "... and {} more", total - printed)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print one result: name, then where it lands.
fn print_item(stdout: &mut StandardStream, item: &ResultItem) -> io::Result<()> {
    write!(stdout, "  ")?;
    if item.exact {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    }
    write!(stdout, "{}", item.display_text)?;
    stdout.reset()?;

    if let [target] = item.targets.as_slice() {
        write!(stdout, "  ")?;
        print_target(stdout, target)?;
        writeln!(stdout)?;
    } else {
        // Ambiguous name: one line per landing place.
        writeln!(stdout)?;
        for target in &item.targets {
            write!(stdout, "    ")?;
            print_target(stdout, target)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn print_target(stdout: &mut StandardStream, target: &Target) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", target.url)?;
    stdout.reset()?;

    if !target.context.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, " ({})", target.context)?;
        stdout.reset()?;
    }

    Ok(())
}
