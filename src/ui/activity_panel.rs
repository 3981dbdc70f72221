use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;
use crate::ui::theme::event_color;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let events = app.recent_activity();
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = events
        .iter()
        .skip(app.activity_scroll)
        .take(visible)
        .map(|event| {
            // RFC 3339 timestamps; the date part is noise at a glance.
            let time: String = event
                .timestamp
                .chars()
                .skip(11)
                .take(8)
                .collect();

            let mut spans = vec![
                Span::styled(
                    format!("{time} "),
                    Style::default().fg(ratatui::style::Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<10}", event.action),
                    Style::default().fg(event_color(&event.action)),
                ),
            ];
            if let Some(title) = &event.issue_title {
                spans.push(Span::raw(title.clone()));
            }
            if let Some(detail) = &event.detail {
                spans.push(Span::styled(
                    format!("  → {detail}"),
                    Style::default().fg(ratatui::style::Color::Gray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if events.is_empty() {
        " Activity (empty) "
    } else {
        " Activity "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ratatui::style::Color::Cyan))
            .title(title),
    );

    f.render_widget(list, area);
}
