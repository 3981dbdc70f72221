use serde::{Deserialize, Serialize};

/// The intake form's saved contact details. One per device; re-submitting
/// the form overwrites the previous values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub phone: String,
    pub saved_at: String,
}

impl Profile {
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
