//! Browser-side half of the contact form: field validation, the submit
//! lifecycle, and the single POST to the submission endpoint.
//!
//! The controller is UI-agnostic; a page binding or a terminal front end
//! implements [`FormView`] and hands it over together with a transport.

use reqwest::Url;

pub mod controller;
pub mod form;
pub mod transport;

pub use controller::{Banner, FormController, FormView, SubmitEvent, SubmitReport, SubmitStatus};
pub use form::{ContactForm, ContactPayload, FormError, FormField};
pub use transport::{HttpTransport, SubmissionTransport, TransportError, TransportResponse};

/// Per-environment client settings.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: Url,
}
