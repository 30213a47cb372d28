//! homa-server
//!
//! HTTP API for the clinic: staff auth, patients, assessments, scoring
//! previews and printable reports.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/scoring/preview", post(routes::scoring::preview))
        .route(
            "/patients",
            get(routes::patients::list_patients).post(routes::patients::create_patient),
        )
        .route(
            "/patients/{id}",
            get(routes::patients::get_patient)
                .put(routes::patients::update_patient)
                .delete(routes::patients::delete_patient),
        )
        .route(
            "/assessments",
            get(routes::assessments::list_assessments)
                .post(routes::assessments::create_assessment),
        )
        .route("/assessments/{id}", get(routes::assessments::get_assessment))
        .route(
            "/assessments/{id}/report",
            get(routes::reports::report_html),
        )
        .route(
            "/assessments/{id}/report.docx",
            get(routes::reports::report_docx),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Public
        .route("/health", get(routes::health::health_check))
        .route("/auth/signup", post(routes::auth::signup))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/scoring/rules", get(routes::scoring::rules))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::trace::log_request)),
        )
        .with_state(state)
}
