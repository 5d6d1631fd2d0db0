use crate::tui::app::{App, ListRow};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(1),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_query_input(f, app, chunks[0]);
    draw_results(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

fn draw_query_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.query.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Enter: print target, Esc: clear/quit) "),
        );

    f.render_widget(input, area);

    let cursor_x = area.x + app.query.chars().count() as u16 + 1;
    f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn draw_results(f: &mut Frame, app: &mut App, area: Rect) {
    let matches = app
        .rows
        .iter()
        .filter(|row| matches!(row, ListRow::Item(_)))
        .count();

    let items: Vec<ListItem> = app.rows.iter().map(render_row).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Results ({}) ", matches)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut app.list);
}

fn render_row(row: &ListRow) -> ListItem<'static> {
    match row {
        ListRow::Section(label) => ListItem::new(Line::from(Span::styled(
            label.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))),
        ListRow::Item(item) => {
            let name_style = if item.exact {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::raw("  "),
                Span::styled(item.display_text.clone(), name_style),
            ];
            if let Some(target) = item.targets.first() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    target.url.clone(),
                    Style::default().fg(Color::Green),
                ));
                if !target.context.is_empty() {
                    spans.push(Span::styled(
                        format!(" ({})", target.context),
                        Style::default().fg(Color::Cyan),
                    ));
                }
            }
            if item.targets.len() > 1 {
                spans.push(Span::styled(
                    format!(" [+{} more]", item.targets.len() - 1),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        }
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Cyan));

    f.render_widget(status, area);
}
