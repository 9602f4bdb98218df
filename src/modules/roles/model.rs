//! Role reference data.
//!
//! The platform has exactly four roles, stored as immutable reference rows
//! and mirrored in code by [`role_ids`] and [`RoleName`]. Registration and
//! login branch exhaustively on [`RoleName`], so a new role cannot silently
//! skip its validation rules.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A role row from the database.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
}

/// The fixed role set, matched exhaustively by the auth workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RoleName {
    Principal,
    Professeur,
    ProfesseurReferent,
    Collegien,
}

impl RoleName {
    /// The display name, as stored in the `roles` table and surfaced to
    /// clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Principal => "Principal",
            RoleName::Professeur => "Professeur",
            RoleName::ProfesseurReferent => "Professeur référent",
            RoleName::Collegien => "Collégien",
        }
    }

    /// Resolves a stored role name; `None` for anything outside the fixed
    /// set (the defensive "Rôle non trouvé" branch).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Principal" => Some(RoleName::Principal),
            "Professeur" => Some(RoleName::Professeur),
            "Professeur référent" => Some(RoleName::ProfesseurReferent),
            "Collégien" => Some(RoleName::Collegien),
            _ => None,
        }
    }

    /// Whether accounts of this role receive a confirmation email after
    /// registration. The Principal bootstraps the platform and is exempt.
    pub fn receives_confirmation_email(&self) -> bool {
        !matches!(self, RoleName::Principal)
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known role identifiers.
///
/// These rows are inserted by the initial migration and never change, so
/// the identifiers can be used directly in queries and seeds.
pub mod role_ids {
    use uuid::Uuid;

    /// Principal role - school director, highest privilege
    pub const PRINCIPAL: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000001);
    /// Professeur role - teacher
    pub const PROFESSEUR: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000002);
    /// Professeur référent role - teacher responsible for one class
    pub const PROFESSEUR_REFERENT: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000003);
    /// Collégien role - student, scoped to one class
    pub const COLLEGIEN: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000004);

    /// Get all role IDs
    pub fn all() -> Vec<Uuid> {
        vec![PRINCIPAL, PROFESSEUR, PROFESSEUR_REFERENT, COLLEGIEN]
    }

    /// Get role name by ID
    pub fn get_name(role_id: &Uuid) -> Option<&'static str> {
        match *role_id {
            id if id == PRINCIPAL => Some("Principal"),
            id if id == PROFESSEUR => Some("Professeur"),
            id if id == PROFESSEUR_REFERENT => Some("Professeur référent"),
            id if id == COLLEGIEN => Some("Collégien"),
            _ => None,
        }
    }
}
