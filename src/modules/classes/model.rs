use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// The entry class level. Collegians registering for this level have no
/// foreign-language (LV2) requirement.
pub const ENTRY_LEVEL: &str = "6ème";

/// A class in the platform, identified by its level ("6ème".."3ème").
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Classe {
    pub id: Uuid,
    pub level: String,
}

impl Classe {
    /// Whether this class level requires a foreign-language track.
    pub fn requires_language(&self) -> bool {
        self.level != ENTRY_LEVEL
    }
}
