use chrono::{Datelike, NaiveDateTime};
use sqlx::PgPool;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::modules::classes::service::ClasseService;
use crate::modules::lessons::model::{CreateLessonDto, Lesson, LessonOfDay, LessonSlotRow};
use crate::modules::lessons::unlock::{UnlockState, french_week_day, remaining_seconds};
use crate::modules::timetables::service::TimeTableService;
use crate::utils::errors::AppError;
use crate::utils::sanitize::escape_html;

pub struct LessonService;

impl LessonService {
    /// Creates a lesson, creating its class (by level) and timetable slot
    /// on demand when they do not exist yet.
    #[instrument(skip(db, dto))]
    pub async fn create_lesson(db: &PgPool, dto: CreateLessonDto) -> Result<Lesson, AppError> {
        let classe = ClasseService::find_or_create_by_level(db, dto.class_level.trim())
            .await
            .map_err(|e| {
                error!(error = %e.error, level = %dto.class_level, "Class lookup/creation failed");
                AppError::internal(anyhow::anyhow!("Échec lors de l'ajout de la classe"))
            })?;

        let timetable = TimeTableService::find_or_create(
            db,
            dto.day_of_week.trim(),
            dto.start_time,
            dto.end_time,
        )
        .await
        .map_err(|e| {
            error!(error = %e.error, "Timetable lookup/creation failed");
            AppError::internal(anyhow::anyhow!("Échec lors de l'ajout de l'horaire"))
        })?;

        let lesson = sqlx::query_as::<_, Lesson>(
            "INSERT INTO lessons (name, class_id, teacher_id, timetable_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, class_id, teacher_id, timetable_id",
        )
        .bind(escape_html(dto.name.trim()))
        .bind(classe.id)
        .bind(dto.id_teacher)
        .bind(timetable.id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Lesson insert failed");
            AppError::internal(anyhow::anyhow!("Échec lors de l'ajout du cours"))
        })?;

        Ok(lesson)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, lesson_id: Uuid) -> Result<Option<Lesson>, AppError> {
        let lesson = sqlx::query_as::<_, Lesson>(
            "SELECT id, name, class_id, teacher_id, timetable_id FROM lessons WHERE id = $1",
        )
        .bind(lesson_id)
        .fetch_optional(db)
        .await?;

        Ok(lesson)
    }

    /// The lessons of one class scheduled on `now`'s weekday, each with
    /// its initial countdown snapshot.
    ///
    /// The inner join on timetables makes a lesson without a slot row
    /// disappear from the listing instead of failing the whole render.
    #[instrument(skip(db))]
    pub async fn lessons_of_the_day(
        db: &PgPool,
        class_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<Vec<LessonOfDay>, AppError> {
        let week_day = french_week_day(now.date().weekday());

        let rows = sqlx::query_as::<_, LessonSlotRow>(
            "SELECT l.id, l.name, t.start_time, t.end_time
             FROM lessons l
             INNER JOIN timetables t ON t.id = l.timetable_id
             WHERE l.class_id = $1 AND t.week_day = $2
             ORDER BY t.start_time",
        )
        .bind(class_id)
        .bind(week_day)
        .fetch_all(db)
        .await?;

        let lessons = rows
            .into_iter()
            .map(|row| {
                let remaining = remaining_seconds(row.start_time, now);
                let state = UnlockState::from_remaining(remaining);
                LessonOfDay {
                    id: row.id,
                    name: row.name,
                    start_time: row.start_time,
                    end_time: row.end_time,
                    remaining_seconds: state.remaining(),
                    remaining_display: state.label(),
                    accessible: state.is_accessible(),
                }
            })
            .collect();

        Ok(lessons)
    }

    /// Lesson names of one class matching a search fragment, for the
    /// autocomplete suggestion list.
    #[instrument(skip(db))]
    pub async fn search_names(
        db: &PgPool,
        class_id: Uuid,
        fragment: &str,
    ) -> Result<Vec<String>, AppError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT name FROM lessons
             WHERE class_id = $1 AND name ILIKE $2
             ORDER BY name",
        )
        .bind(class_id)
        .bind(format!("%{}%", fragment))
        .fetch_all(db)
        .await?;

        Ok(names)
    }
}
