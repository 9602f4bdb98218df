use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Course content attached to a lesson. Media fields hold stored paths or
/// URLs; upload mechanics live outside this API.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub unlock_at: DateTime<Utc>,
    pub subject: String,
    pub summary: String,
    pub content: String,
    pub image_path: Option<String>,
    pub audio_path: Option<String>,
    pub video_url: Option<String>,
    pub pdf_path: Option<String>,
    pub external_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a course.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[serde(rename = "idLesson")]
    pub id_lesson: Uuid,
    #[serde(rename = "unlockDate")]
    pub unlock_date: DateTime<Utc>,
    #[validate(length(min = 1, message = "Veuillez renseigner le sujet du cours"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Veuillez renseigner le résumé du cours"))]
    pub summary: String,
    #[validate(length(min = 1, message = "Veuillez renseigner le contenu du cours"))]
    pub content: String,
    pub video: Option<String>,
    #[validate(url(message = "Le lien fourni n'est pas valide."))]
    pub link: Option<String>,
    pub image_path: Option<String>,
    pub audio_path: Option<String>,
    pub pdf_path: Option<String>,
}

/// DTO for updating a course. Media fields left out keep their stored
/// values.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[serde(rename = "idLesson")]
    pub id_lesson: Uuid,
    #[serde(rename = "unlockDate")]
    pub unlock_date: DateTime<Utc>,
    #[validate(length(min = 1, message = "Veuillez renseigner le sujet du cours"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Veuillez renseigner le résumé du cours"))]
    pub summary: String,
    #[validate(length(min = 1, message = "Veuillez renseigner le contenu du cours"))]
    pub content: String,
    pub video: Option<String>,
    #[validate(url(message = "Le lien fourni n'est pas valide."))]
    pub link: Option<String>,
    pub image_path: Option<String>,
    pub audio_path: Option<String>,
    pub pdf_path: Option<String>,
}

/// Outcome body for course mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseActionResponse {
    pub success: bool,
    pub message: String,
}

/// Rewrites a YouTube watch URL into its embeddable form. `None` when the
/// URL is not a plain watch link.
pub fn to_youtube_embed(url: &str) -> Option<String> {
    let video_id = url.strip_prefix("https://www.youtube.com/watch?v=")?;

    let valid = !video_id.is_empty()
        && video_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    valid.then(|| format!("https://www.youtube.com/embed/{}", video_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_url_is_rewritten() {
        assert_eq!(
            to_youtube_embed("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_non_youtube_url_is_rejected() {
        assert!(to_youtube_embed("https://vimeo.com/12345").is_none());
        assert!(to_youtube_embed("https://www.youtube.com/watch?v=").is_none());
        assert!(to_youtube_embed("https://www.youtube.com/watch?v=abc&t=12").is_none());
    }
}
