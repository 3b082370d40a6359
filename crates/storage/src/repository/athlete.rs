use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// Column list for `athletes` queries.
const COLUMNS: &str = "\
    athlete_id, name, cpf, age, weight, height, sex, created_at, \
    category_id, training_center_id";

/// Repository for Athlete database operations
pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let query = format!("SELECT {COLUMNS} FROM athletes ORDER BY created_at, name");
        let athletes = sqlx::query_as::<_, Athlete>(&query)
            .fetch_all(self.pool)
            .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let query = format!("SELECT {COLUMNS} FROM athletes WHERE athlete_id = $1");
        let athlete = sqlx::query_as::<_, Athlete>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete row with the two resolved foreign keys attached.
    ///
    /// The identifier and creation timestamp are generated here, before the
    /// insert, and never change afterwards. The foreign-key constraints make
    /// the insert fail atomically if a referenced row vanished after the
    /// name lookup; that failure is mapped back to `NotFound`.
    pub async fn create(
        &self,
        req: &CreateAthleteRequest,
        category_id: Uuid,
        training_center_id: Uuid,
    ) -> Result<Athlete> {
        let query = format!(
            "INSERT INTO athletes \
                 (athlete_id, name, cpf, age, weight, height, sex, created_at, \
                  category_id, training_center_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let athlete = sqlx::query_as::<_, Athlete>(&query)
            .bind(Uuid::new_v4())
            .bind(&req.name)
            .bind(&req.cpf)
            .bind(req.age)
            .bind(req.weight)
            .bind(req.height)
            .bind(&req.sex)
            .bind(chrono::Utc::now().naive_utc())
            .bind(category_id)
            .bind(training_center_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    match db_err.code().as_deref() {
                        Some("23505") => {
                            return StorageError::ConstraintViolation(
                                "CPF already exists".to_string(),
                            );
                        }
                        Some("23503") => return StorageError::NotFound,
                        _ => {}
                    }
                }
                StorageError::from(e)
            })?;

        Ok(athlete)
    }

    /// Update an existing athlete, applying only the supplied fields
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let cpf = req.cpf.as_ref().unwrap_or(&existing.cpf);
        let age = req.age.unwrap_or(existing.age);
        let weight = req.weight.unwrap_or(existing.weight);
        let height = req.height.unwrap_or(existing.height);
        let sex = req.sex.as_ref().unwrap_or(&existing.sex);

        let query = format!(
            "UPDATE athletes \
             SET name = $2, cpf = $3, age = $4, weight = $5, height = $6, sex = $7 \
             WHERE athlete_id = $1 \
             RETURNING {COLUMNS}"
        );
        let athlete = sqlx::query_as::<_, Athlete>(&query)
            .bind(id)
            .bind(name)
            .bind(cpf)
            .bind(age)
            .bind(weight)
            .bind(height)
            .bind(sex)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.code().as_deref() == Some("23505") {
                        return StorageError::ConstraintViolation(
                            "CPF already exists".to_string(),
                        );
                    }
                }
                StorageError::from(e)
            })?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
