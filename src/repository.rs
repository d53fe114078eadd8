//! Persistence for the person table. All values are bound as parameters.

use crate::error::{AppError, ResultExt};
use crate::models::{Person, PersonInput};
use sqlx::SqlitePool;

const SELECT_ONE: &str =
    "SELECT id, email, phone, firstName, lastName FROM person WHERE id = ?";
const SELECT_PAGE: &str =
    "SELECT id, email, phone, firstName, lastName FROM person ORDER BY id LIMIT ? OFFSET ?";
const INSERT: &str = "INSERT INTO person (email, phone, firstName, lastName) VALUES (?, ?, ?, ?)";
const UPDATE: &str =
    "UPDATE person SET email = ?, phone = ?, firstName = ?, lastName = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM person WHERE id = ?";

#[derive(Clone)]
pub struct PersonRepository {
    pool: SqlitePool,
}

impl PersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch one row by id. An empty result is reported as `NotFound`.
    pub async fn get_person(&self, id: i64) -> Result<Person, AppError> {
        const OP: &str = "person_repository.get_person";
        tracing::debug!(sql = SELECT_ONE, id, "query");
        sqlx::query_as::<_, Person>(SELECT_ONE)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, id))
            .context(OP)
    }

    /// Rows ordered by id; an offset past the end yields an empty vec.
    pub async fn get_persons(&self, limit: i64, offset: i64) -> Result<Vec<Person>, AppError> {
        const OP: &str = "person_repository.get_persons";
        tracing::debug!(sql = SELECT_PAGE, limit, offset, "query");
        sqlx::query_as::<_, Person>(SELECT_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .context(OP)
    }

    /// Insert a row and return the id assigned by the store.
    pub async fn create_person(&self, person: &PersonInput) -> Result<i64, AppError> {
        const OP: &str = "person_repository.create_person";
        tracing::debug!(sql = INSERT, "query");
        let result = sqlx::query(INSERT)
            .bind(&person.email)
            .bind(&person.phone)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, 0))
            .context(OP)?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every mutable column of row `id`. Zero affected rows is `NotFound`.
    pub async fn update_person(&self, person: &PersonInput, id: i64) -> Result<i64, AppError> {
        const OP: &str = "person_repository.update_person";
        tracing::debug!(sql = UPDATE, id, "query");
        let result = sqlx::query(UPDATE)
            .bind(&person.email)
            .bind(&person.phone)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, id))
            .context(OP)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("person {}", id)).context(OP));
        }
        Ok(id)
    }

    /// Remove row `id`. Deleting a missing row is not an error.
    pub async fn delete_person(&self, id: i64) -> Result<(), AppError> {
        const OP: &str = "person_repository.delete_person";
        tracing::debug!(sql = DELETE, id, "query");
        sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .context(OP)?;
        Ok(())
    }
}

fn classify(e: sqlx::Error, id: i64) -> AppError {
    match e {
        sqlx::Error::RowNotFound => AppError::NotFound(format!("person {}", id)),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(db.message().to_string())
        }
        other => AppError::Db(other),
    }
}
