use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match app.view {
        View::Dashboard => {
            spans.push(hint("↑↓", "navigate"));
            spans.push(hint("tab", "switch pane"));
            spans.push(hint("space", "resolve"));
            spans.push(hint("enter", "vote"));
            spans.push(hint("r", "report"));
            spans.push(hint("c", "contact"));
            spans.push(hint("a", "activity"));
            spans.push(hint("i", "details"));
            spans.push(hint("q", "quit"));
        }
        View::Intake | View::Contact => {
            spans.push(hint("tab", "next field"));
            spans.push(hint("enter", "submit"));
            spans.push(hint("esc", "dashboard"));
        }
        View::Report => {
            spans.push(hint("tab", "next field"));
            spans.push(hint("ctrl+g", "use my location"));
            spans.push(hint("enter", "submit"));
            spans.push(hint("esc", "dashboard"));
        }
        View::Activity => {
            spans.push(hint("↑↓", "scroll"));
            spans.push(hint("esc", "dashboard"));
            spans.push(hint("q", "quit"));
        }
    }

    // Flash message
    if let Some((msg, _)) = &app.flash_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            msg,
            Style::default().fg(ratatui::style::Color::Yellow),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);
    f.render_widget(paragraph, area);
}

fn hint(key: &str, desc: &str) -> Span<'static> {
    Span::styled(
        format!(" {key}:{desc} "),
        Style::default().fg(ratatui::style::Color::DarkGray),
    )
}
