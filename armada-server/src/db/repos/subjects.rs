//! Subject repository
//!
//! Subjects and species are reference data maintained out of band; this
//! repo only reads.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Subject row joined with its species name
#[derive(Debug, Clone, FromRow)]
pub struct SubjectRecord {
    pub subject_id: i32,
    pub subject_name: String,
    pub species_name: String,
    pub date_of_birth: NaiveDate,
}

/// Subject repository
pub struct SubjectRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SubjectRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all subjects, most recently born first.
    pub async fn list(&self) -> Result<Vec<SubjectRecord>, DbError> {
        let subjects = sqlx::query_as::<_, SubjectRecord>(
            r#"
            SELECT
                s.subject_id,
                s.subject_name,
                sp.species_name,
                s.date_of_birth
            FROM subject s
            JOIN species sp ON sp.species_id = s.species_id
            ORDER BY s.date_of_birth DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(subjects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p armada-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_by_birth_date_descending() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        let subjects = SubjectRepo::new(&pool).list().await.expect("list failed");

        for pair in subjects.windows(2) {
            assert!(pair[0].date_of_birth >= pair[1].date_of_birth);
        }
    }
}
