/// Text-form state shared by the intake, report, and contact views: a fixed
/// set of labelled fields, one focused at a time, plus the inline status
/// message shown under the fields.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub message: Option<FormMessage>,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct FormMessage {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl FormState {
    pub fn new(labels: &[&'static str]) -> Self {
        Self {
            fields: labels
                .iter()
                .map(|label| FormField {
                    label,
                    value: String::new(),
                })
                .collect(),
            focus: 0,
            message: None,
        }
    }

    pub fn value(&self, index: usize) -> &str {
        &self.fields[index].value
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        self.fields[index].value = value.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.fields[self.focus].value.push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus].value.pop();
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.focus = if self.focus == 0 {
            self.fields.len() - 1
        } else {
            self.focus - 1
        };
    }

    /// Clears every field and returns focus to the first one. The status
    /// message survives, matching how the pages leave their confirmation
    /// text visible after a reset.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.message = Some(FormMessage {
            text: text.into(),
            tone: Tone::Error,
        });
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.message = Some(FormMessage {
            text: text.into(),
            tone: Tone::Success,
        });
    }
}
