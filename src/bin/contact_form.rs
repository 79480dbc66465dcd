#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

//! Sends one contact form submission from the terminal, running the same
//! controller the website uses.

use clap::Parser;
use folio_contact::client::{
    Banner, ClientConfig, ContactForm, FormController, FormField, FormView, HttpTransport, SubmitEvent, SubmitReport,
    SubmitStatus,
};
use folio_contact::config::TelemetryConfig;
use folio_contact::telemetry;
use reqwest::Url;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about = "Submit the portfolio contact form from the command line", long_about = None)]
struct Args {
    /// Submission endpoint for the target environment
    #[arg(long, env = "CONTACT_ENDPOINT")]
    endpoint: Url,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    message: String,

    /// Treat the phone field as mandatory
    #[arg(long, default_value_t = false)]
    phone_required: bool,

    #[command(flatten)]
    telemetry: TelemetryConfig,
}

/// Renders the form's UI state as log lines.
#[derive(Debug)]
struct TerminalView {
    fields: ContactForm,
    phone_required: bool,
}

impl FormView for TerminalView {
    fn read_fields(&self) -> ContactForm {
        self.fields.clone()
    }

    fn phone_required(&self) -> bool {
        self.phone_required
    }

    fn focus(&mut self, field: FormField) {
        tracing::warn!(field = ?field, "Field needs attention");
    }

    fn show_banner(&mut self, banner: Banner) {
        match banner {
            Banner::Success(text) => tracing::info!("{text}"),
            Banner::Error(text) => tracing::error!("{text}"),
        }
    }

    fn clear_banner(&mut self) {}

    fn clear_fields(&mut self) {
        self.fields = ContactForm::default();
    }

    fn render_status(&mut self, status: SubmitStatus) {
        tracing::debug!(status = ?status, "Form status changed");
    }
}

/// A terminal invocation has no default action to suppress.
#[derive(Debug)]
struct CommandLineSubmit;

impl SubmitEvent for CommandLineSubmit {
    fn prevent_default(&mut self) {}
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let telemetry_guard = telemetry::init_telemetry(&args.telemetry)?;

    let view = TerminalView {
        fields: ContactForm { name: args.name, email: args.email, phone: args.phone, message: args.message },
        phone_required: args.phone_required,
    };
    let transport = HttpTransport::new(&ClientConfig { endpoint: args.endpoint });
    let mut controller = FormController::new(view, transport);

    let report = controller.on_submit(&mut CommandLineSubmit).await;
    telemetry_guard.shutdown();

    Ok(if report == SubmitReport::Delivered { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
