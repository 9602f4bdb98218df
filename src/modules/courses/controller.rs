use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Course, CourseActionResponse, CreateCourseDto, UpdateCourseDto};
use super::service::CourseService;

fn action_failure(err: AppError) -> Response {
    (
        err.status,
        Json(CourseActionResponse {
            success: false,
            message: err.error.to_string(),
        }),
    )
        .into_response()
}

/// Create course content for a lesson
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Course created", body = CourseActionResponse),
        (status = 400, description = "Invalid YouTube or external link", body = CourseActionResponse),
        (status = 403, description = "Not logged in as teaching staff"),
        (status = 404, description = "Lesson not found", body = CourseActionResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Response {
    match CourseService::create_course(&state.db, dto).await {
        Ok(_) => Json(CourseActionResponse {
            success: true,
            message: "Cours ajouté avec succès".to_string(),
        })
        .into_response(),
        Err(err) => action_failure(err),
    }
}

/// Courses of one lesson
#[utoipa::path(
    get,
    path = "/api/courses/lesson/{lesson_id}",
    params(("lesson_id" = Uuid, Path, description = "Lesson identifier")),
    responses(
        (status = 200, description = "Courses of the lesson", body = [Course]),
        (status = 401, description = "Not logged in"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn courses_by_lesson(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
    Path(lesson_id): Path<Uuid>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::find_by_lesson(&state.db, lesson_id).await?;
    Ok(Json(courses))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseSearchQuery {
    pub keyword: Option<String>,
}

/// Keyword search over course subject, summary and content
#[utoipa::path(
    get,
    path = "/api/courses/search",
    params(CourseSearchQuery),
    responses(
        (status = 200, description = "Matching courses", body = [Course]),
        (status = 401, description = "Not logged in"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn search_courses(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
    Query(query): Query<CourseSearchQuery>,
) -> Result<Json<Vec<Course>>, AppError> {
    let keyword = query.keyword.unwrap_or_default();
    let courses = if keyword.is_empty() {
        Vec::new()
    } else {
        CourseService::search_by_keyword(&state.db, &keyword).await?
    };

    Ok(Json(courses))
}

/// Update a course; media fields left out keep their stored values
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course identifier")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseActionResponse),
        (status = 403, description = "Not logged in as teaching staff"),
        (status = 404, description = "Course not found", body = CourseActionResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Response {
    match CourseService::update_course(&state.db, course_id, dto).await {
        Ok(_) => Json(CourseActionResponse {
            success: true,
            message: "Cours mis à jour avec succès.".to_string(),
        })
        .into_response(),
        Err(err) => action_failure(err),
    }
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course deleted", body = CourseActionResponse),
        (status = 403, description = "Not logged in as teaching staff"),
        (status = 404, description = "Course not found", body = CourseActionResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip_all)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Response {
    match CourseService::delete_course(&state.db, course_id).await {
        Ok(()) => Json(CourseActionResponse {
            success: true,
            message: "Cours supprimé avec succès.".to_string(),
        })
        .into_response(),
        Err(err) => action_failure(err),
    }
}
