use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_academic_semester, delete_academic_semester, get_all_academic_semesters,
    get_single_academic_semester, update_academic_semester,
};

pub fn init_academic_semesters_router() -> Router<AppState> {
    Router::new()
        .route("/create-semester", post(create_academic_semester))
        .route("/", get(get_all_academic_semesters))
        .route(
            "/{id}",
            get(get_single_academic_semester)
                .patch(update_academic_semester)
                .delete(delete_academic_semester),
        )
}
