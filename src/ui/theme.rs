use ratatui::style::Color;

use crate::form::Tone;
use crate::model::issue::IssueStatus;

pub fn status_color(status: IssueStatus) -> Color {
    match status {
        IssueStatus::Pending => Color::Yellow,
        IssueStatus::InProgress => Color::Cyan,
        IssueStatus::Resolved => Color::Green,
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Error => Color::Red,
    }
}

pub fn event_color(action: &str) -> Color {
    match action {
        "reported" => Color::Blue,
        "voted" => Color::Cyan,
        "status" => Color::Green,
        _ => Color::White,
    }
}

pub fn border_color(focused: bool) -> Color {
    if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}
