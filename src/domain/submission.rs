use serde::Serialize;
use serde_json::Value;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

/// Stored in place of an optional field the visitor did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Body of an inbound submission request. Every field is optional at this
/// stage; presence is checked by the submission service.
#[derive(Debug, Default, Clone)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    /// Reads the text fields out of any JSON value. A body that is not an
    /// object, or a field that is not a string, counts as missing.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        Self {
            name: text_field(value, "name"),
            email: text_field(value, "email"),
            phone: text_field(value, "phone"),
            message: text_field(value, "message"),
        }
    }

    /// Returns the required fields when all of them are present and non-empty.
    #[must_use]
    pub fn required_fields(&self) -> Option<(&str, &str, &str)> {
        let name = non_empty(self.name.as_deref())?;
        let email = non_empty(self.email.as_deref())?;
        let message = non_empty(self.message.as_deref())?;
        Some((name, email, message))
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A single contact-form submission. Built once, written once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "submissionId")]
    id: Uuid,
    timestamp: String,
    name: String,
    email: String,
    phone: String,
    message: String,
    #[serde(rename = "ipAddress")]
    source_address: String,
}

impl Submission {
    /// Assigns a fresh id and the current UTC time. Absent `phone` and
    /// `source_address` fall back to [`NOT_AVAILABLE`].
    #[must_use]
    pub fn new(name: &str, email: &str, phone: Option<&str>, message: &str, source_address: Option<&str>) -> Self {
        Self::with_identity(Uuid::new_v4(), OffsetDateTime::now_utc(), name, email, phone, message, source_address)
    }

    #[must_use]
    pub fn with_identity(
        id: Uuid,
        created_at: OffsetDateTime,
        name: &str,
        email: &str,
        phone: Option<&str>,
        message: &str,
        source_address: Option<&str>,
    ) -> Self {
        // Millisecond precision, always in UTC with a `Z` suffix.
        let timestamp = created_at
            .to_offset(UtcOffset::UTC)
            .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"))
            .unwrap_or_else(|_| created_at.unix_timestamp().to_string());
        Self {
            id,
            timestamp,
            name: name.to_string(),
            email: email.to_string(),
            phone: non_empty(phone).unwrap_or(NOT_AVAILABLE).to_string(),
            message: message.to_string(),
            source_address: non_empty(source_address).unwrap_or(NOT_AVAILABLE).to_string(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    /// Builds the operator alert announcing this submission.
    #[must_use]
    pub fn notification(&self) -> Notification {
        Notification {
            subject: format!("New Portfolio Contact Form Submission ({})", self.name),
            body: format!(
                "New Contact Form Submission!\n\n\
                 Name: {}\n\
                 Email: {}\n\
                 Phone: {}\n\
                 Message: {}\n\
                 Timestamp: {}\n\
                 Submission ID: {}",
                self.name, self.email, self.phone, self.message, self.timestamp, self.id
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}
