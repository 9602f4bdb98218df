use chrono::NaiveTime;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::timetables::model::TimeTable;
use crate::utils::errors::AppError;

pub struct TimeTableService;

impl TimeTableService {
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, timetable_id: Uuid) -> Result<Option<TimeTable>, AppError> {
        let timetable = sqlx::query_as::<_, TimeTable>(
            "SELECT id, week_day, start_time, end_time FROM timetables WHERE id = $1",
        )
        .bind(timetable_id)
        .fetch_optional(db)
        .await?;

        Ok(timetable)
    }

    #[instrument(skip(db))]
    pub async fn find_by_slot(
        db: &PgPool,
        week_day: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Option<TimeTable>, AppError> {
        let timetable = sqlx::query_as::<_, TimeTable>(
            "SELECT id, week_day, start_time, end_time FROM timetables
             WHERE week_day = $1 AND start_time = $2 AND end_time = $3",
        )
        .bind(week_day)
        .bind(start_time)
        .bind(end_time)
        .fetch_optional(db)
        .await?;

        Ok(timetable)
    }

    #[instrument(skip(db))]
    pub async fn create(
        db: &PgPool,
        week_day: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<TimeTable, AppError> {
        let timetable = sqlx::query_as::<_, TimeTable>(
            "INSERT INTO timetables (week_day, start_time, end_time)
             VALUES ($1, $2, $3)
             RETURNING id, week_day, start_time, end_time",
        )
        .bind(week_day)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(db)
        .await?;

        Ok(timetable)
    }

    /// Looks the slot up, creating it when absent. Timetable rows are
    /// shared between lessons with the same (day, start, end).
    #[instrument(skip(db))]
    pub async fn find_or_create(
        db: &PgPool,
        week_day: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<TimeTable, AppError> {
        if let Some(timetable) = Self::find_by_slot(db, week_day, start_time, end_time).await? {
            return Ok(timetable);
        }

        Self::create(db, week_day, start_time, end_time).await
    }
}
