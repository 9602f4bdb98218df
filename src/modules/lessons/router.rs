use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::{require_collegian, require_principal};
use crate::state::AppState;

use super::controller::{create_lesson, lesson_names, today_lessons};

pub fn init_lessons_router() -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/", post(create_lesson))
        .route_layer(middleware::from_fn(require_principal));

    let collegian_routes = Router::new()
        .route("/today", get(today_lessons))
        .route("/names", get(lesson_names))
        .route_layer(middleware::from_fn(require_collegian));

    admin_routes.merge(collegian_routes)
}
