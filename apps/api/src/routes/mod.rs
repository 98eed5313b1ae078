pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume conversion
        .route("/api/v1/resumes/builder", post(resume::handle_to_builder))
        .route("/api/v1/resumes/parsed", post(resume::handle_from_builder))
        .route("/api/v1/resumes/diff", post(resume::handle_enhancement_diff))
        // Template & color registry
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/templates/customize",
            post(templates::handle_customize),
        )
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        .route(
            "/api/v1/color-schemes",
            get(templates::handle_list_color_schemes),
        )
        .route(
            "/api/v1/color-schemes/:id",
            get(templates::handle_get_color_scheme),
        )
        .with_state(state)
}
