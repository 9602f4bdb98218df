use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{csrf_token, login_user, logout_user, register_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/csrf", get(csrf_token))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
}
