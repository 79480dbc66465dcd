use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Trimmed, validated values ready to send. `phone` is always present, even
/// when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please enter your message")]
    MissingMessage,
}

impl FormError {
    /// The field that should receive focus.
    #[must_use]
    pub const fn field(self) -> FormField {
        match self {
            Self::MissingName => FormField::Name,
            Self::InvalidEmail => FormField::Email,
            Self::MissingPhone => FormField::Phone,
            Self::MissingMessage => FormField::Message,
        }
    }
}

impl ContactForm {
    /// Checks name, email, phone, message in that order and stops at the
    /// first failure. The email check is only a coarse `@` and `.` test.
    ///
    /// # Errors
    /// Returns the first failing field's [`FormError`].
    pub fn validate(&self, phone_required: bool) -> Result<ContactPayload, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if email.is_empty() || !email.contains('@') || !email.contains('.') {
            return Err(FormError::InvalidEmail);
        }
        if phone_required && phone.is_empty() {
            return Err(FormError::MissingPhone);
        }
        if message.is_empty() {
            return Err(FormError::MissingMessage);
        }

        Ok(ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        })
    }
}
