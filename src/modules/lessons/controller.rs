use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use chrono::Local;
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateLessonDto, LessonActionResponse, LessonNamesResponse, LessonOfDay};
use super::service::LessonService;

/// Create a lesson, with its class and timetable slot created on demand
#[utoipa::path(
    post,
    path = "/api/lessons",
    request_body = CreateLessonDto,
    responses(
        (status = 200, description = "Lesson created", body = LessonActionResponse),
        (status = 403, description = "Not logged in as Principal"),
        (status = 500, description = "Creation failure", body = LessonActionResponse)
    ),
    tag = "Lessons"
)]
#[instrument(skip_all)]
pub async fn create_lesson(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateLessonDto>,
) -> Response {
    match LessonService::create_lesson(&state.db, dto).await {
        Ok(_) => Json(LessonActionResponse {
            success: true,
            message: "Cours ajouté avec succès".to_string(),
        })
        .into_response(),
        Err(err) => (
            err.status,
            Json(LessonActionResponse {
                success: false,
                message: err.error.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Today's lessons for the logged-in collegian's class, with countdowns
#[utoipa::path(
    get,
    path = "/api/lessons/today",
    responses(
        (status = 200, description = "Lessons of the day with initial countdown snapshots", body = [LessonOfDay]),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Not a collegian"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lessons"
)]
#[instrument(skip_all)]
pub async fn today_lessons(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<Vec<LessonOfDay>>, AppError> {
    let class_id = identity.class_id.ok_or_else(|| {
        AppError::forbidden(anyhow::anyhow!("Aucune classe associée à ce compte"))
    })?;

    let now = Local::now().naive_local();
    let lessons = LessonService::lessons_of_the_day(&state.db, class_id, now).await?;

    Ok(Json(lessons))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LessonNameQuery {
    /// Search fragment typed so far; suggestions fire from one character.
    pub q: Option<String>,
}

/// Lesson-name autocomplete over the collegian's class
#[utoipa::path(
    get,
    path = "/api/lessons/names",
    params(LessonNameQuery),
    responses(
        (status = 200, description = "Matching lesson names", body = LessonNamesResponse),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Not a collegian"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lessons"
)]
#[instrument(skip_all)]
pub async fn lesson_names(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Query(query): Query<LessonNameQuery>,
) -> Result<Json<LessonNamesResponse>, AppError> {
    let class_id = identity.class_id.ok_or_else(|| {
        AppError::forbidden(anyhow::anyhow!("Aucune classe associée à ce compte"))
    })?;

    let fragment = query.q.unwrap_or_default();
    let lesson_names = if fragment.is_empty() {
        Vec::new()
    } else {
        LessonService::search_names(&state.db, class_id, &fragment).await?
    };

    Ok(Json(LessonNamesResponse { lesson_names }))
}
