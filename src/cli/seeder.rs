use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::roles::model::role_ids;

/// Class levels of a French collège, entry level first.
pub const CLASS_LEVELS: [&str; 4] = ["6ème", "5ème", "4ème", "3ème"];

/// LV2 languages offered from 5ème on.
pub const LANGUAGES: [&str; 3] = ["Espagnol", "Allemand", "Italien"];

/// Email domain marking seeded demo accounts, so `clear-seed` can remove
/// them without touching real data.
const DEMO_DOMAIN: &str = "demo.college-en-ligne.fr";

/// Inserts the reference classes and languages. Idempotent.
pub async fn seed_reference_data(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    for level in CLASS_LEVELS {
        sqlx::query("INSERT INTO classes (level) VALUES ($1) ON CONFLICT (level) DO NOTHING")
            .bind(level)
            .execute(db)
            .await?;
    }

    for name in LANGUAGES {
        sqlx::query("INSERT INTO languages (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(db)
            .await?;
    }

    println!(
        "✅ Reference data seeded: {} classes, {} languages",
        CLASS_LEVELS.len(),
        LANGUAGES.len()
    );

    Ok(())
}

/// Seeds fake teachers and collegians for local development.
///
/// All demo accounts share one bcrypt hash (low cost, this is throwaway
/// data) and land under the demo email domain.
pub async fn seed_demo_data(
    db: &PgPool,
    teachers: usize,
    collegians_per_class: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    seed_reference_data(db).await?;

    let password_hash = bcrypt::hash("MamanRosa1.&", 4)?;

    for i in 0..teachers {
        let first_name: String = FirstName().fake();
        let last_name: String = LastName().fake();
        let email = format!("prof{}.{}@{}", i, last_name.to_lowercase(), DEMO_DOMAIN);

        sqlx::query(
            "INSERT INTO teachers (first_name, last_name, email, password, role_id)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email)
        .bind(&password_hash)
        .bind(role_ids::PROFESSEUR)
        .execute(db)
        .await?;
    }

    let classes = sqlx::query_as::<_, (Uuid, String)>("SELECT id, level FROM classes")
        .fetch_all(db)
        .await?;
    let language_ids =
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM languages ORDER BY name")
            .fetch_all(db)
            .await?;

    let mut seeded_collegians = 0;
    for (class_id, level) in &classes {
        for i in 0..collegians_per_class {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "eleve{}.{}.{}@{}",
                i,
                level.replace('è', "e"),
                last_name.to_lowercase(),
                DEMO_DOMAIN
            );

            // The entry level has no LV2 track.
            let language_id = if level == "6ème" {
                None
            } else {
                language_ids.get(i % language_ids.len().max(1)).copied()
            };

            sqlx::query(
                "INSERT INTO collegians
                     (first_name, last_name, email, password, class_id, language_id, role_id)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 ON CONFLICT (email) DO NOTHING",
            )
            .bind(&first_name)
            .bind(&last_name)
            .bind(&email)
            .bind(&password_hash)
            .bind(class_id)
            .bind(language_id)
            .bind(role_ids::COLLEGIEN)
            .execute(db)
            .await?;

            seeded_collegians += 1;
        }
    }

    println!(
        "✅ Demo data seeded: {} teachers, {} collegians (password: MamanRosa1.&)",
        teachers, seeded_collegians
    );

    Ok(())
}

/// Removes the seeded demo accounts. Reference data and real accounts are
/// left untouched.
pub async fn clear_seeded_data(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let pattern = format!("%@{}", DEMO_DOMAIN);

    let collegians = sqlx::query("DELETE FROM collegians WHERE email LIKE $1")
        .bind(&pattern)
        .execute(db)
        .await?
        .rows_affected();

    let teachers = sqlx::query("DELETE FROM teachers WHERE email LIKE $1")
        .bind(&pattern)
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "✅ Seeded data cleared: {} collegians, {} teachers",
        collegians, teachers
    );

    Ok(())
}
