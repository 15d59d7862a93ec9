use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::academic_departments::router::init_academic_departments_router;
use crate::modules::academic_faculties::router::init_academic_faculties_router;
use crate::modules::academic_semesters::router::init_academic_semesters_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::faculties::router::init_faculties_router;
use crate::modules::students::router::init_students_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(root))
        .nest(
            "/api/v1",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/users", init_users_router())
                .nest("/students", init_students_router())
                .nest("/faculties", init_faculties_router())
                .nest("/academic-faculties", init_academic_faculties_router())
                .nest("/academic-semesters", init_academic_semesters_router())
                .nest("/academic-departments", init_academic_departments_router()),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}

async fn root() -> &'static str {
    "Varsity API is up and running"
}

/// Fixed envelope for unmatched routes.
async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Not found",
            "errorMessages": [
                {
                    "path": uri.path(),
                    "message": "Api Not found",
                }
            ],
        })),
    )
}
