use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A lesson row: a subject taught to one class by one teacher in one
/// weekly timetable slot.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Lesson {
    pub id: Uuid,
    pub name: String,
    pub class_id: Uuid,
    pub teacher_id: Uuid,
    pub timetable_id: Uuid,
}

/// DTO for creating a lesson. The class is referenced by level and the
/// slot by its day/times; both are created on demand when absent.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateLessonDto {
    #[validate(length(min = 1, message = "Veuillez renseigner le nom du cours"))]
    pub name: String,
    #[serde(rename = "classLevel")]
    #[validate(length(min = 1, message = "Veuillez renseigner le niveau de la classe"))]
    pub class_level: String,
    #[serde(rename = "idTeacher")]
    pub id_teacher: Uuid,
    #[serde(rename = "dayOfWeek")]
    #[validate(length(min = 1, message = "Veuillez renseigner le jour du cours"))]
    pub day_of_week: String,
    #[serde(rename = "startTime")]
    pub start_time: NaiveTime,
    #[serde(rename = "endTime")]
    pub end_time: NaiveTime,
}

/// Outcome body for lesson mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct LessonActionResponse {
    pub success: bool,
    pub message: String,
}

/// Row shape of the today-listing query: the lesson joined with its slot.
#[derive(FromRow, Debug, Clone)]
pub struct LessonSlotRow {
    pub id: Uuid,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// One lesson link of the day, with its initial countdown snapshot.
///
/// `remaining_seconds` is the numeric payload the client counts down
/// from; `remaining_display` is the first-paint label ("01h 01m 01s" or
/// "Accéder").
#[derive(Debug, Serialize, ToSchema)]
pub struct LessonOfDay {
    pub id: Uuid,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub remaining_seconds: i64,
    pub remaining_display: String,
    pub accessible: bool,
}

/// Autocomplete payload: matching lesson names for the collegian's class.
#[derive(Debug, Serialize, ToSchema)]
pub struct LessonNamesResponse {
    pub lesson_names: Vec<String>,
}
