// Route table for the judge API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/evaluate", post(handlers::evaluate_submission))
        .route("/challenges", get(handlers::list_challenges))
        .route("/challenges/:id", get(handlers::get_challenge))
        .route("/challenges/:id/run", post(handlers::run_challenge))
        .route("/challenges/:id/submit", post(handlers::submit_challenge))
}
