use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A recurring weekly slot. `week_day` holds the French day name
/// ("Lundi".."Dimanche"), matching what the lesson listing filters on.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TimeTable {
    pub id: Uuid,
    pub week_day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
