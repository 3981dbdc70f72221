use thiserror::Error;

/// What a form can get wrong. The message text is what the inline
/// red message shows, so it is written for end users.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number (10+ digits).")]
    InvalidPhone,
}

/// Report form: title, description, and location are all required.
pub fn report(title: &str, desc: &str, loc: &str) -> Result<(), ValidationError> {
    require(title, "title")?;
    require(desc, "description")?;
    require(loc, "location")?;
    Ok(())
}

/// Contact form: all fields required, email must look like an address.
pub fn contact(name: &str, email: &str, message: &str) -> Result<(), ValidationError> {
    require(name, "name")?;
    require(email, "email")?;
    require(message, "message")?;
    if !email_ok(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Intake form: email and phone required; phone needs 10+ digits once
/// spaces and dashes are stripped.
pub fn intake(email: &str, phone: &str) -> Result<(), ValidationError> {
    require(email, "email")?;
    require(phone, "phone")?;
    if !email_ok(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !phone_ok(phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn email_ok(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

fn phone_ok(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    digits.len() >= 10 && digits.chars().all(|c| c.is_ascii_digit())
}
