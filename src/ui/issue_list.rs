use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, DashboardPane};
use crate::model::issue::IssueStatus;
use crate::ui::theme::{border_color, status_color};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.pane == DashboardPane::Issues;

    let items: Vec<ListItem> = app
        .snapshot
        .iter()
        .enumerate()
        .map(|(i, issue)| {
            let selected = focused && i == app.selected_issue;

            let checkbox = if issue.status == IssueStatus::Resolved {
                Span::styled("[x] ", Style::default().fg(status_color(issue.status)))
            } else {
                Span::raw("[ ] ")
            };

            let id_span = Span::styled(
                format!("{} ", issue.id),
                Style::default().fg(ratatui::style::Color::DarkGray),
            );

            // Truncate title to fit
            let max_title = area.width.saturating_sub(28) as usize;
            let title: String = issue.title.chars().take(max_title).collect();
            let title_style = if selected {
                Style::default()
                    .fg(ratatui::style::Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let title_span = Span::styled(title, title_style);

            let meta_span = Span::styled(
                format!(" ({} votes, {})", issue.votes, issue.status),
                Style::default().fg(status_color(issue.status)),
            );

            let line = Line::from(vec![checkbox, id_span, title_span, meta_span]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(focused)))
            .title(" Reported Issues "),
    );

    f.render_widget(list, area);
}
