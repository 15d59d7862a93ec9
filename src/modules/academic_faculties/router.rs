use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_academic_faculty, delete_academic_faculty, get_all_academic_faculties,
    get_single_academic_faculty, update_academic_faculty,
};

pub fn init_academic_faculties_router() -> Router<AppState> {
    Router::new()
        .route("/create-faculty", post(create_academic_faculty))
        .route("/", get(get_all_academic_faculties))
        .route(
            "/{id}",
            get(get_single_academic_faculty)
                .patch(update_academic_faculty)
                .delete(delete_academic_faculty),
        )
}
