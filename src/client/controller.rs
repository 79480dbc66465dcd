use crate::client::form::{ContactForm, FormError, FormField};
use crate::client::transport::{SubmissionTransport, TransportResponse};
use serde::Deserialize;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const CONNECTIVITY_MESSAGE: &str =
    "There was a problem sending your message. Please check your internet connection.";

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// A request is in flight: trigger disabled, busy indicator shown.
    Submitting,
    /// The last request finished, one way or another.
    Done,
}

impl SubmitStatus {
    #[must_use]
    pub const fn trigger_enabled(self) -> bool {
        !matches!(self, Self::Submitting)
    }

    #[must_use]
    pub const fn busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// The user action that started a submit. Its default behavior (page
/// navigation, in a browser) is always suppressed.
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

/// Everything the controller needs from the surrounding UI.
pub trait FormView {
    fn read_fields(&self) -> ContactForm;
    /// Whether the form marks the phone field as mandatory.
    fn phone_required(&self) -> bool;
    fn focus(&mut self, field: FormField);
    fn show_banner(&mut self, banner: Banner);
    fn clear_banner(&mut self);
    fn clear_fields(&mut self);
    fn render_status(&mut self, status: SubmitStatus);
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// A request was already in flight.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid(FormError),
    /// The endpoint accepted the submission.
    Delivered,
    /// The endpoint answered with a non-2xx status.
    Refused { status: u16, message: String },
    /// No response was received.
    Unreachable,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn refusal_message(response: &TransportResponse) -> String {
    serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| format!("Request failed with status {}", response.status))
}

#[derive(Debug)]
pub struct FormController<V, T> {
    view: V,
    transport: T,
    status: SubmitStatus,
}

impl<V: FormView, T: SubmissionTransport> FormController<V, T> {
    pub fn new(mut view: V, transport: T) -> Self {
        view.render_status(SubmitStatus::Idle);
        Self { view, transport, status: SubmitStatus::Idle }
    }

    #[must_use]
    pub const fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
        self.view.render_status(status);
    }

    /// Handles one submit action end to end.
    pub async fn on_submit<E: SubmitEvent>(&mut self, event: &mut E) -> SubmitReport {
        event.prevent_default();

        if self.status == SubmitStatus::Submitting {
            tracing::debug!("Submit ignored while a request is in flight");
            return SubmitReport::Ignored;
        }

        let payload = match self.view.read_fields().validate(self.view.phone_required()) {
            Ok(payload) => payload,
            Err(e) => {
                self.view.show_banner(Banner::Error(e.to_string()));
                self.view.focus(e.field());
                return SubmitReport::Invalid(e);
            }
        };

        self.set_status(SubmitStatus::Submitting);
        self.view.clear_banner();

        let in_flight = InFlight { view: &mut self.view, status: &mut self.status };
        match self.transport.post(&payload).await {
            Ok(response) if response.is_success() => {
                in_flight.view.show_banner(Banner::Success(SUCCESS_MESSAGE.to_string()));
                in_flight.view.clear_fields();
                SubmitReport::Delivered
            }
            Ok(response) => {
                let message = refusal_message(&response);
                tracing::warn!(status = response.status, message = %message, "Submission refused");
                in_flight.view.show_banner(Banner::Error(format!("Oops! Something went wrong: {message}")));
                SubmitReport::Refused { status: response.status, message }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Submission could not be sent");
                in_flight.view.show_banner(Banner::Error(CONNECTIVITY_MESSAGE.to_string()));
                SubmitReport::Unreachable
            }
        }
    }
}

/// Moves the controller to `Done` on drop, which also covers a cancelled
/// `on_submit` future.
struct InFlight<'a, V: FormView> {
    view: &'a mut V,
    status: &'a mut SubmitStatus,
}

impl<V: FormView> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        *self.status = SubmitStatus::Done;
        self.view.render_status(SubmitStatus::Done);
    }
}
