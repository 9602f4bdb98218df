use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::role::require_teaching_staff;
use crate::state::AppState;

use super::controller::{
    courses_by_lesson, create_course, delete_course, search_courses, update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    let staff_routes = Router::new()
        .route("/", post(create_course))
        .route("/{id}", put(update_course).delete(delete_course))
        .route_layer(middleware::from_fn(require_teaching_staff));

    let reader_routes = Router::new()
        .route("/lesson/{lesson_id}", get(courses_by_lesson))
        .route("/search", get(search_courses));

    staff_routes.merge(reader_routes)
}
