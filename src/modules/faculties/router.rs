use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_faculty, delete_faculty, get_all_faculties, get_single_faculty, update_faculty,
};

pub fn init_faculties_router() -> Router<AppState> {
    Router::new()
        .route("/create-faculty", post(create_faculty))
        .route("/", get(get_all_faculties))
        .route(
            "/{id}",
            get(get_single_faculty)
                .patch(update_faculty)
                .delete(delete_faculty),
        )
}
