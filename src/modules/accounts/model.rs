//! Account records across the four role tables.
//!
//! Accounts live in four parallel tables (principals, teachers,
//! teacher_referents, collegians). [`AccountRecord`] is the unified shape
//! the auth workflows operate on; the per-table lookups fan out behind
//! [`super::service::AccountService`] in a fixed precedence order so that
//! behavior stays deterministic even if the cross-table uniqueness
//! invariant were ever violated.

use sqlx::FromRow;
use uuid::Uuid;

/// Which role table an account was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Principal,
    Professeur,
    ProfesseurReferent,
    Collegien,
}

/// A credential record, unified across the four role tables.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role_id: Uuid,
    pub class_id: Option<Uuid>,
    pub language_id: Option<Uuid>,
    pub kind: AccountKind,
}

/// Common columns of the principals and teachers tables.
#[derive(FromRow, Debug, Clone)]
pub struct BaseAccountRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role_id: Uuid,
}

/// A teacher_referents row, which additionally carries the class.
#[derive(FromRow, Debug, Clone)]
pub struct ReferentRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub class_id: Uuid,
    pub role_id: Uuid,
}

/// A collegians row, which carries the class and optional LV2 language.
#[derive(FromRow, Debug, Clone)]
pub struct CollegianRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub class_id: Uuid,
    pub language_id: Option<Uuid>,
    pub role_id: Uuid,
}

impl BaseAccountRow {
    pub fn into_record(self, kind: AccountKind) -> AccountRecord {
        AccountRecord {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            role_id: self.role_id,
            class_id: None,
            language_id: None,
            kind,
        }
    }
}

impl From<ReferentRow> for AccountRecord {
    fn from(row: ReferentRow) -> Self {
        AccountRecord {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password: row.password,
            role_id: row.role_id,
            class_id: Some(row.class_id),
            language_id: None,
            kind: AccountKind::ProfesseurReferent,
        }
    }
}

impl From<CollegianRow> for AccountRecord {
    fn from(row: CollegianRow) -> Self {
        AccountRecord {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password: row.password,
            role_id: row.role_id,
            class_id: Some(row.class_id),
            language_id: row.language_id,
            kind: AccountKind::Collegien,
        }
    }
}

/// Sanitized, hashed input for inserting a new account row.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: Uuid,
}
