//! HTTP server for the backend.
//!
//! Provides endpoints for:
//! - One `POST` route per persona (`/hiteshsir`, `/piyushsir`)
//! - Health check (`/health`)

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, header::InvalidHeaderValue, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use baatcheet_core::{AskRequest, Persona};

use crate::state::AppState;

mod handlers;
pub mod responses;

pub use responses::{ApiError, ErrorObject, ErrorResponse};

/// Create the HTTP router.
///
/// Browser access is limited to `allowed_origin`.
pub fn create_router(
    state: Arc<AppState>,
    allowed_origin: &str,
) -> Result<Router, InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_str(allowed_origin)?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new().route("/health", get(handlers::health_check));

    // Each persona route is bound to its literal generator name
    for persona in Persona::all() {
        router = router.route(
            &persona.path(),
            post(
                move |State(state): State<Arc<AppState>>,
                      body: Result<Json<AskRequest>, JsonRejection>| {
                    handlers::ask(state, persona, body)
                },
            ),
        );
    }

    Ok(router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
