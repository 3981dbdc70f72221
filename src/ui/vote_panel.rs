use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, DashboardPane};
use crate::ui::theme::border_color;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.pane == DashboardPane::Picker;

    let items: Vec<ListItem> = app
        .snapshot
        .iter()
        .enumerate()
        .map(|(i, issue)| {
            let selected = focused && i == app.selected_choice;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(ratatui::style::Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(issue.title.clone(), style),
            ]))
        })
        .collect();

    let title = if app.snapshot.is_empty() {
        " Select & Vote (no issues) "
    } else {
        " Select & Vote "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(focused)))
            .title(title),
    );

    f.render_widget(list, area);
}
