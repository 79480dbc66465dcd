use crate::api::AppState;
use crate::api::schemas::contact::{SubmissionAccepted, SubmissionFailed, SubmissionRejected};
use crate::core::submission_service::{ACCEPTED_MESSAGE, SubmissionOutcome};
use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Answers a CORS pre-flight. No body and no content type.
pub async fn preflight(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!("Answering CORS pre-flight");
    (StatusCode::NO_CONTENT, state.cors.to_header_map())
}

/// Accepts one contact form submission.
///
/// The body is read as raw bytes so that an unparseable payload is reported
/// as a processing failure rather than an extractor rejection.
pub async fn submit(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let source_address = state.source_address.resolve(&parts);

    let outcome = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => state.submission_service.submit(&bytes, source_address.as_deref()).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read submission body");
            SubmissionOutcome::failed(e)
        }
    };

    let mut response = outcome_response(outcome);
    state.cors.apply(response.headers_mut());
    response
}

fn outcome_response(outcome: SubmissionOutcome) -> Response {
    match outcome {
        SubmissionOutcome::Accepted { submission_id } => (
            StatusCode::OK,
            Json(SubmissionAccepted { message: ACCEPTED_MESSAGE.to_string(), submission_id }),
        )
            .into_response(),
        SubmissionOutcome::Rejected { message } => {
            (StatusCode::BAD_REQUEST, Json(SubmissionRejected { message })).into_response()
        }
        SubmissionOutcome::Failed { message, error } => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(SubmissionFailed { message, error })).into_response()
        }
    }
}
