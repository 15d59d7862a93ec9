use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_user, delete_user, get_all_users, get_single_user, update_user};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/create-user", post(create_user))
        .route("/", get(get_all_users))
        .route(
            "/{id}",
            get(get_single_user).patch(update_user).delete(delete_user),
        )
}
