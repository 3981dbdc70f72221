use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::theme::status_color;

/// The highest-voted issue, or a placeholder when nothing is reported yet.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.snapshot.first() {
        Some(top) => Line::from(vec![
            Span::styled(
                format!("{} ", top.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({} votes, {})", top.votes, top.status),
                Style::default().fg(status_color(top.status)),
            ),
        ]),
        None => Line::from(Span::styled(
            "No issues reported yet.",
            Style::default().fg(ratatui::style::Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ratatui::style::Color::Magenta))
            .title(" Highest Priority "),
    );

    f.render_widget(paragraph, area);
}
