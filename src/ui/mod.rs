pub mod activity_panel;
pub mod footer;
pub mod form_panel;
pub mod issue_list;
pub mod theme;
pub mod top_issue;
pub mod vote_panel;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};

pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // main content
            Constraint::Length(1), // footer
        ])
        .split(size);

    let main_area = vertical[0];
    let footer_area = vertical[1];

    match app.view {
        View::Dashboard => {
            // Issue list (60%) + vote picker / top issue (40%)
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(main_area);

            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(4)])
                .split(horizontal[1]);

            issue_list::render(f, horizontal[0], app);
            vote_panel::render(f, right[0], app);
            top_issue::render(f, right[1], app);
        }
        View::Intake => {
            form_panel::render(
                f,
                main_area,
                &app.intake_form,
                " Your Details ",
                Some("Your contact details stay on this device."),
            );
        }
        View::Report => {
            let hint = if app.locating {
                Some("Locating...")
            } else {
                Some("ctrl+g fills the location from this device.")
            };
            form_panel::render(f, main_area, &app.report_form, " Report an Issue ", hint);
        }
        View::Contact => {
            form_panel::render(f, main_area, &app.contact_form, " Contact Us ", None);
        }
        View::Activity => {
            activity_panel::render(f, main_area, app);
        }
    }

    footer::render(f, footer_area, app);
}
