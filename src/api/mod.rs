use crate::api::client_ip::SourceAddressResolver;
use crate::api::cors::CorsHeaders;
use crate::config::ServerConfig;
use crate::core::submission_service::SubmissionService;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{Router, routing::post};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod client_ip;
pub mod contact;
pub mod cors;
pub mod schemas;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct AppState {
    pub submission_service: SubmissionService,
    pub cors: CorsHeaders,
    pub source_address: SourceAddressResolver,
    pub max_body_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(server: &ServerConfig, submission_service: SubmissionService, cors: CorsHeaders) -> Self {
        Self {
            submission_service,
            cors,
            source_address: SourceAddressResolver::new(server.trusted_proxies.clone()),
            max_body_bytes: server.max_body_bytes,
        }
    }
}

/// Configures and returns the contact form router.
pub fn app_router(route_path: &str, state: AppState) -> Router {
    let path = if route_path.starts_with('/') { route_path.to_string() } else { format!("/{route_path}") };

    Router::new()
        .route(&path, post(contact::submit).options(contact::preflight))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "otel.kind" = "server",
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        let status = response.status();
                        tracing::Span::current().record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid))
        .with_state(state)
}
