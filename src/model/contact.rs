use serde::{Deserialize, Serialize};

/// One feedback message from the contact form, appended to the contact log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sent_at: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            sent_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
