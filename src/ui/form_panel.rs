use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::FormState;
use crate::ui::theme::tone_color;

/// Shared renderer for the intake, report, and contact forms: one line per
/// field, the focused field highlighted with a cursor, the inline status
/// message underneath.
pub fn render(
    f: &mut Frame,
    area: Rect,
    form: &FormState,
    title: &'static str,
    hint: Option<&str>,
) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default()
                .fg(ratatui::style::Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ratatui::style::Color::Gray)
        };

        let mut spans = vec![
            Span::styled(format!("{:<12}", format!("{}:", field.label)), label_style),
            Span::raw(field.value.clone()),
        ];
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(ratatui::style::Color::Cyan),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    if let Some(hint) = hint {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(ratatui::style::Color::DarkGray),
        )));
    }

    if let Some(message) = &form.message {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            message.text.clone(),
            Style::default().fg(tone_color(message.tone)),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ratatui::style::Color::Cyan))
            .title(title),
    );

    f.render_widget(paragraph, area);
}
