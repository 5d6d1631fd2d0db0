mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Load the table at `path` and run the interactive search loop.
///
/// The table loads before the terminal switches modes, so load failures
/// print like any other CLI error. Pressing Enter exits and prints the
/// selected target URL to stdout once the terminal is restored.
pub fn run(path: &Path) -> Result<()> {
    let table = crate::index::load_path(path)?;
    let mut app = App::new(table);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Some(url) = result? {
        println!("{url}");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<Option<String>>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        // Runs any query whose debounce window has elapsed.
        app.tick();

        terminal.draw(|f| ui::draw(f, app))?;

        // Poll with a short timeout so ticks fire during typing pauses.
        if !event::poll(Duration::from_millis(30))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Only handle key press events, not release or repeat
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(None),
                    (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(None),
                    // Delete word backward
                    (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.delete_word(),
                    // Ctrl+h - backspace (terminal standard)
                    (KeyModifiers::CONTROL, KeyCode::Char('h')) => app.pop_char(),
                    (KeyModifiers::CONTROL, KeyCode::Char('n')) => app.select_next(),
                    (KeyModifiers::CONTROL, KeyCode::Char('p')) => app.select_prev(),
                    (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                        KeyCode::Esc => {
                            if app.query.is_empty() {
                                return Ok(None);
                            }
                            app.clear_query();
                        }
                        KeyCode::Enter => {
                            if let Some(url) = app.activate() {
                                return Ok(Some(url));
                            }
                        }
                        KeyCode::Down | KeyCode::Tab => app.select_next(),
                        KeyCode::Up | KeyCode::BackTab => app.select_prev(),
                        KeyCode::Backspace => app.pop_char(),
                        KeyCode::Char(c) => app.push_char(c),
                        _ => {}
                    },
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app.select_next(),
                MouseEventKind::ScrollUp => app.select_prev(),
                _ => {}
            },
            _ => {}
        }
    }
}
