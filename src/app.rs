use std::path::PathBuf;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::event::KeyAction;
use crate::form::FormState;
use crate::geo;
use crate::model::contact::Contact;
use crate::model::issue::{Issue, IssueDraft, IssueStatus};
use crate::model::profile::Profile;
use crate::store::activity::{append_event, new_event, read_events, ActivityEvent};
use crate::store::contacts::append_contact;
use crate::store::issues::IssueStore;
use crate::store::profile::save_profile;
use crate::validate;

pub const INTAKE_EMAIL: usize = 0;
pub const INTAKE_PHONE: usize = 1;
pub const REPORT_TITLE: usize = 0;
pub const REPORT_DESC: usize = 1;
pub const REPORT_LOC: usize = 2;
pub const CONTACT_NAME: usize = 0;
pub const CONTACT_EMAIL: usize = 1;
pub const CONTACT_MESSAGE: usize = 2;

#[derive(Debug, Clone)]
pub enum Action {
    Key(KeyAction),
    Tick,
    LocationResolved(String),
    Navigate(View),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Intake,
    Report,
    Contact,
    Dashboard,
    Activity,
}

/// Which dashboard section has keyboard focus: the resolve list or the
/// vote picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPane {
    Issues,
    Picker,
}

enum FormEvent {
    Handled,
    Submit,
    Leave,
    Locate,
}

pub struct App {
    pub view: View,
    pub pane: DashboardPane,
    pub snapshot: Vec<Issue>,
    pub selected_issue: usize,
    pub selected_choice: usize,
    pub intake_form: FormState,
    pub report_form: FormState,
    pub contact_form: FormState,
    pub activity_scroll: usize,
    pub locating: bool,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    store: IssueStore,
    data_dir: PathBuf,
    config: AppConfig,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(
        config: AppConfig,
        store: IssueStore,
        data_dir: PathBuf,
        profile: Option<Profile>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let snapshot = store.sorted_by_votes();

        let mut intake_form = FormState::new(&["Email", "Phone"]);
        if let Some(profile) = &profile {
            intake_form.set_value(INTAKE_EMAIL, profile.email.clone());
            intake_form.set_value(INTAKE_PHONE, profile.phone.clone());
        }

        // First run goes through intake, like the site's landing form.
        let view = if profile.is_some() {
            View::Dashboard
        } else {
            View::Intake
        };

        Self {
            view,
            pane: DashboardPane::Issues,
            snapshot,
            selected_issue: 0,
            selected_choice: 0,
            intake_form,
            report_form: FormState::new(&["Title", "Description", "Location"]),
            contact_form: FormState::new(&["Name", "Email", "Message"]),
            activity_scroll: 0,
            locating: false,
            flash_message: None,
            should_quit: false,
            store,
            data_dir,
            config,
            action_tx,
        }
    }

    pub fn update(&mut self, action: Action) {
        // Clear flash message after 3 seconds
        if let Some((_, t)) = &self.flash_message {
            if t.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }

        match action {
            Action::Key(key) => self.handle_key(key),
            Action::Tick => {
                let _ = self.store.reload();
                self.refresh();
            }
            Action::LocationResolved(loc) => {
                self.locating = false;
                self.report_form.set_value(REPORT_LOC, loc);
            }
            Action::Navigate(view) => {
                self.view = view;
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_key(&mut self, key: KeyAction) {
        match self.view {
            View::Dashboard => self.dashboard_key(key),
            View::Activity => self.activity_key(key),
            View::Intake => match apply_edit(&mut self.intake_form, key) {
                FormEvent::Submit => self.submit_intake(),
                FormEvent::Leave => self.view = View::Dashboard,
                FormEvent::Handled | FormEvent::Locate => {}
            },
            View::Report => match apply_edit(&mut self.report_form, key) {
                FormEvent::Submit => self.submit_report(),
                FormEvent::Leave => self.view = View::Dashboard,
                FormEvent::Locate => self.request_location(),
                FormEvent::Handled => {}
            },
            View::Contact => match apply_edit(&mut self.contact_form, key) {
                FormEvent::Submit => self.submit_contact(),
                FormEvent::Leave => self.view = View::Dashboard,
                FormEvent::Handled | FormEvent::Locate => {}
            },
        }
    }

    fn dashboard_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Up => match self.pane {
                DashboardPane::Issues => {
                    self.selected_issue = self.selected_issue.saturating_sub(1);
                }
                DashboardPane::Picker => {
                    self.selected_choice = self.selected_choice.saturating_sub(1);
                }
            },
            KeyAction::Down => match self.pane {
                DashboardPane::Issues => {
                    if !self.snapshot.is_empty()
                        && self.selected_issue < self.snapshot.len() - 1
                    {
                        self.selected_issue += 1;
                    }
                }
                DashboardPane::Picker => {
                    if !self.snapshot.is_empty()
                        && self.selected_choice < self.snapshot.len() - 1
                    {
                        self.selected_choice += 1;
                    }
                }
            },
            KeyAction::Tab | KeyAction::Left | KeyAction::Right => {
                self.pane = match self.pane {
                    DashboardPane::Issues => DashboardPane::Picker,
                    DashboardPane::Picker => DashboardPane::Issues,
                };
            }
            KeyAction::Select => match self.pane {
                DashboardPane::Picker => self.vote_selected(),
                DashboardPane::Issues => self.toggle_selected(),
            },
            KeyAction::Char(' ') => {
                if self.pane == DashboardPane::Issues {
                    self.toggle_selected();
                }
            }
            KeyAction::Char('r') => self.view = View::Report,
            KeyAction::Char('c') => self.view = View::Contact,
            KeyAction::Char('i') => self.view = View::Intake,
            KeyAction::Char('a') => self.view = View::Activity,
            KeyAction::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn activity_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Up => self.activity_scroll = self.activity_scroll.saturating_sub(1),
            KeyAction::Down => self.activity_scroll += 1,
            KeyAction::Left | KeyAction::Escape => self.view = View::Dashboard,
            KeyAction::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Vote for the picker's current selection and re-sort the board.
    fn vote_selected(&mut self) {
        let Some(issue) = self.snapshot.get(self.selected_choice).cloned() else {
            self.flash("Please select an issue.");
            return;
        };
        match self.store.vote(&issue.title) {
            Ok(true) => {
                let _ = append_event(
                    &self.data_dir,
                    &new_event("voted", Some(&issue.id), Some(&issue.title), None),
                );
                self.refresh();
                self.flash(format!("Voted for \"{}\"!", issue.title));
            }
            Ok(false) => self.flash(format!("No issue titled \"{}\".", issue.title)),
            Err(e) => self.flash(format!("Vote failed: {e}")),
        }
    }

    /// Checkbox semantics: checking resolves, unchecking returns to Pending.
    /// Keyed by id so duplicate titles can't cross-toggle.
    fn toggle_selected(&mut self) {
        let Some(issue) = self.snapshot.get(self.selected_issue).cloned() else {
            return;
        };
        let next = if issue.status == IssueStatus::Resolved {
            IssueStatus::Pending
        } else {
            IssueStatus::Resolved
        };
        match self.store.set_status_by_id(&issue.id, next) {
            Ok(true) => {
                let _ = append_event(
                    &self.data_dir,
                    &new_event(
                        "status",
                        Some(&issue.id),
                        Some(&issue.title),
                        Some(next.as_str()),
                    ),
                );
                self.refresh();
            }
            Ok(false) => {}
            Err(e) => self.flash(format!("Update failed: {e}")),
        }
    }

    fn submit_intake(&mut self) {
        let email = self.intake_form.value(INTAKE_EMAIL).trim().to_string();
        let phone = self.intake_form.value(INTAKE_PHONE).trim().to_string();
        if let Err(e) = validate::intake(&email, &phone) {
            self.intake_form.set_error(e.to_string());
            return;
        }

        let profile = Profile::new(email, phone);
        if let Err(e) = save_profile(&self.data_dir, &profile) {
            self.intake_form.set_error(format!("Could not save details: {e}"));
            return;
        }
        self.intake_form
            .set_success("Details saved! Redirecting to report...");
        self.navigate_after_delay(View::Report);
    }

    fn submit_report(&mut self) {
        let title = self.report_form.value(REPORT_TITLE).trim().to_string();
        let desc = self.report_form.value(REPORT_DESC).trim().to_string();
        let loc = self.report_form.value(REPORT_LOC).trim().to_string();
        if let Err(e) = validate::report(&title, &desc, &loc) {
            self.report_form.set_error(e.to_string());
            return;
        }

        match self.store.append(IssueDraft { title, desc, loc }) {
            Ok(issue) => {
                let _ = append_event(
                    &self.data_dir,
                    &new_event("reported", Some(&issue.id), Some(&issue.title), None),
                );
                self.refresh();
                self.report_form.set_success(format!(
                    "Report \"{}\" submitted! Track it on the dashboard.",
                    issue.title
                ));
                self.report_form.reset();
                self.navigate_after_delay(View::Dashboard);
            }
            Err(e) => self.report_form.set_error(format!("Could not save report: {e}")),
        }
    }

    fn submit_contact(&mut self) {
        let name = self.contact_form.value(CONTACT_NAME).trim().to_string();
        let email = self.contact_form.value(CONTACT_EMAIL).trim().to_string();
        let message = self.contact_form.value(CONTACT_MESSAGE).trim().to_string();
        if let Err(e) = validate::contact(&name, &email, &message) {
            self.contact_form.set_error(e.to_string());
            return;
        }

        let contact = Contact::new(name, email, message);
        match append_contact(&self.data_dir, &contact) {
            Ok(()) => {
                self.contact_form
                    .set_success("Thank you! Your feedback will help improve transparency.");
                self.contact_form.reset();
            }
            Err(e) => self
                .contact_form
                .set_error(format!("Could not save feedback: {e}")),
        }
    }

    fn request_location(&mut self) {
        if self.locating {
            return;
        }
        self.locating = true;
        let config = self.config.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let loc = geo::resolve_location(&config).await;
            let _ = tx.send(Action::LocationResolved(loc));
        });
    }

    /// The site's cosmetic ~1 s pause between a successful submission and
    /// the page change.
    fn navigate_after_delay(&self, view: View) {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = tx.send(Action::Navigate(view));
        });
    }

    fn refresh(&mut self) {
        self.snapshot = self.store.sorted_by_votes();
        if !self.snapshot.is_empty() {
            self.selected_issue = self.selected_issue.min(self.snapshot.len() - 1);
            self.selected_choice = self.selected_choice.min(self.snapshot.len() - 1);
        } else {
            self.selected_issue = 0;
            self.selected_choice = 0;
        }
    }

    fn flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    pub fn recent_activity(&self) -> Vec<ActivityEvent> {
        read_events(&self.data_dir, Some(200))
    }
}

fn apply_edit(form: &mut FormState, key: KeyAction) -> FormEvent {
    match key {
        KeyAction::Char(c) => {
            form.insert_char(c);
            FormEvent::Handled
        }
        KeyAction::Backspace => {
            form.backspace();
            FormEvent::Handled
        }
        KeyAction::Tab | KeyAction::Down => {
            form.next_field();
            FormEvent::Handled
        }
        KeyAction::BackTab | KeyAction::Up => {
            form.prev_field();
            FormEvent::Handled
        }
        KeyAction::Escape => FormEvent::Leave,
        KeyAction::Select => FormEvent::Submit,
        KeyAction::Locate => FormEvent::Locate,
        _ => FormEvent::Handled,
    }
}
