use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_academic_department, delete_academic_department, get_all_academic_departments,
    get_single_academic_department, update_academic_department,
};

pub fn init_academic_departments_router() -> Router<AppState> {
    Router::new()
        .route("/create-department", post(create_academic_department))
        .route("/", get(get_all_academic_departments))
        .route(
            "/{id}",
            get(get_single_academic_department)
                .patch(update_academic_department)
                .delete(delete_academic_department),
        )
}
