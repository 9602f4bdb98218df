use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::list_roles;

pub fn init_roles_router() -> Router<AppState> {
    Router::new().route("/", get(list_roles))
}
