use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::list_languages;

pub fn init_languages_router() -> Router<AppState> {
    Router::new().route("/", get(list_languages))
}
