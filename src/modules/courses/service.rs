use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto, to_youtube_embed};
use crate::modules::lessons::service::LessonService;
use crate::utils::errors::AppError;
use crate::utils::sanitize::escape_html;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        LessonService::find_by_id(db, dto.id_lesson)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Leçon non trouvée")))?;

        let video_url = match dto.video.as_deref().filter(|v| !v.is_empty()) {
            Some(url) => Some(to_youtube_embed(url).ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("Le lien YouTube n'est pas valide."))
            })?),
            None => None,
        };

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses
                 (lesson_id, unlock_at, subject, summary, content,
                  image_path, audio_path, video_url, pdf_path, external_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, lesson_id, unlock_at, subject, summary, content,
                       image_path, audio_path, video_url, pdf_path, external_link, created_at",
        )
        .bind(dto.id_lesson)
        .bind(dto.unlock_date)
        .bind(escape_html(dto.subject.trim()))
        .bind(escape_html(dto.summary.trim()))
        .bind(escape_html(&dto.content))
        .bind(&dto.image_path)
        .bind(&dto.audio_path)
        .bind(video_url)
        .bind(&dto.pdf_path)
        .bind(&dto.link)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, course_id: Uuid) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, lesson_id, unlock_at, subject, summary, content,
                    image_path, audio_path, video_url, pdf_path, external_link, created_at
             FROM courses WHERE id = $1",
        )
        .bind(course_id)
        .fetch_optional(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn find_by_lesson(db: &PgPool, lesson_id: Uuid) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, lesson_id, unlock_at, subject, summary, content,
                    image_path, audio_path, video_url, pdf_path, external_link, created_at
             FROM courses WHERE lesson_id = $1
             ORDER BY unlock_at",
        )
        .bind(lesson_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    /// Keyword search over subject, summary and content.
    #[instrument(skip(db))]
    pub async fn search_by_keyword(db: &PgPool, keyword: &str) -> Result<Vec<Course>, AppError> {
        let pattern = format!("%{}%", keyword);
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, lesson_id, unlock_at, subject, summary, content,
                    image_path, audio_path, video_url, pdf_path, external_link, created_at
             FROM courses
             WHERE subject ILIKE $1 OR summary ILIKE $1 OR content ILIKE $1
             ORDER BY created_at DESC",
        )
        .bind(pattern)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    /// Updates a course; media fields not re-supplied keep their stored
    /// values, and the creation date never changes.
    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        course_id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let existing = Self::find_by_id(db, course_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Cours non trouvé.")))?;

        let video_url = match dto.video.as_deref().filter(|v| !v.is_empty()) {
            Some(url) => Some(to_youtube_embed(url).ok_or_else(|| {
                AppError::bad_request(anyhow::anyhow!("Le lien YouTube n'est pas valide."))
            })?),
            None => existing.video_url,
        };

        let image_path = dto.image_path.or(existing.image_path);
        let audio_path = dto.audio_path.or(existing.audio_path);
        let pdf_path = dto.pdf_path.or(existing.pdf_path);
        let external_link = dto.link.or(existing.external_link);

        let course = sqlx::query_as::<_, Course>(
            "UPDATE courses
             SET lesson_id = $1, unlock_at = $2, subject = $3, summary = $4, content = $5,
                 image_path = $6, audio_path = $7, video_url = $8, pdf_path = $9,
                 external_link = $10
             WHERE id = $11
             RETURNING id, lesson_id, unlock_at, subject, summary, content,
                       image_path, audio_path, video_url, pdf_path, external_link, created_at",
        )
        .bind(dto.id_lesson)
        .bind(dto.unlock_date)
        .bind(escape_html(dto.subject.trim()))
        .bind(escape_html(dto.summary.trim()))
        .bind(escape_html(&dto.content))
        .bind(image_path)
        .bind(audio_path)
        .bind(video_url)
        .bind(pdf_path)
        .bind(external_link)
        .bind(course_id)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, course_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Échec de la suppression du cours."
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::lessons::model::CreateLessonDto;
    use chrono::{TimeZone, Utc};

    async fn create_lesson(pool: &PgPool) -> Uuid {
        LessonService::create_lesson(
            pool,
            CreateLessonDto {
                name: "Anglais".to_string(),
                class_level: "6ème".to_string(),
                id_teacher: Uuid::new_v4(),
                day_of_week: "Lundi".to_string(),
                start_time: "08:00:00".parse().unwrap(),
                end_time: "09:00:00".parse().unwrap(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn course_dto(lesson_id: Uuid, subject: &str) -> CreateCourseDto {
        CreateCourseDto {
            id_lesson: lesson_id,
            unlock_date: Utc.with_ymd_and_hms(2024, 9, 2, 8, 0, 0).unwrap(),
            subject: subject.to_string(),
            summary: "Révisions".to_string(),
            content: "Le présent simple".to_string(),
            video: None,
            link: None,
            image_path: None,
            audio_path: None,
            pdf_path: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_course_rewrites_youtube_url(pool: PgPool) {
        let lesson_id = create_lesson(&pool).await;

        let mut dto = course_dto(lesson_id, "Grammaire");
        dto.video = Some("https://www.youtube.com/watch?v=abc123".to_string());

        let course = CourseService::create_course(&pool, dto).await.unwrap();
        assert_eq!(
            course.video_url.as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_course_rejects_bad_youtube_url(pool: PgPool) {
        let lesson_id = create_lesson(&pool).await;

        let mut dto = course_dto(lesson_id, "Grammaire");
        dto.video = Some("https://example.com/watch?v=abc".to_string());

        let err = CourseService::create_course(&pool, dto).await.unwrap_err();
        assert_eq!(err.error.to_string(), "Le lien YouTube n'est pas valide.");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_course_requires_existing_lesson(pool: PgPool) {
        let err = CourseService::create_course(&pool, course_dto(Uuid::new_v4(), "Grammaire"))
            .await
            .unwrap_err();
        assert_eq!(err.error.to_string(), "Leçon non trouvée");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_search_by_keyword(pool: PgPool) {
        let lesson_id = create_lesson(&pool).await;

        CourseService::create_course(&pool, course_dto(lesson_id, "Le passé composé"))
            .await
            .unwrap();
        CourseService::create_course(&pool, course_dto(lesson_id, "Vocabulaire"))
            .await
            .unwrap();

        let matches = CourseService::search_by_keyword(&pool, "passé")
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].subject, "Le passé composé");

        // Content matches too.
        let matches = CourseService::search_by_keyword(&pool, "présent simple")
            .await
            .unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_course_keeps_existing_media(pool: PgPool) {
        let lesson_id = create_lesson(&pool).await;

        let mut dto = course_dto(lesson_id, "Grammaire");
        dto.image_path = Some("/uploads/images/verbes.png".to_string());
        let created = CourseService::create_course(&pool, dto).await.unwrap();

        let updated = CourseService::update_course(
            &pool,
            created.id,
            UpdateCourseDto {
                id_lesson: lesson_id,
                unlock_date: created.unlock_at,
                subject: "Grammaire avancée".to_string(),
                summary: "Révisions".to_string(),
                content: "Le présent simple".to_string(),
                video: None,
                link: None,
                image_path: None,
                audio_path: None,
                pdf_path: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.subject, "Grammaire avancée");
        assert_eq!(
            updated.image_path.as_deref(),
            Some("/uploads/images/verbes.png")
        );
        assert_eq!(updated.created_at, created.created_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_course(pool: PgPool) {
        let lesson_id = create_lesson(&pool).await;
        let created = CourseService::create_course(&pool, course_dto(lesson_id, "Grammaire"))
            .await
            .unwrap();

        CourseService::delete_course(&pool, created.id).await.unwrap();

        assert!(
            CourseService::find_by_id(&pool, created.id)
                .await
                .unwrap()
                .is_none()
        );

        let err = CourseService::delete_course(&pool, created.id)
            .await
            .unwrap_err();
        assert_eq!(err.error.to_string(), "Échec de la suppression du cours.");
    }
}
