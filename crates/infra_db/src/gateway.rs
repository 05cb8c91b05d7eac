//! The storage gateway
//!
//! Executes parameterized statements and routine invocations against the
//! pool and decodes typed output - scalars, single rows, or row sequences.
//! The gateway knows nothing about catalog semantics; callers pass the SQL
//! text and a `Params` list, and the gateway runs the statement, classifies
//! any failure into `DatabaseError`, and returns the connection to the pool
//! on every exit path. No retries happen here.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Arguments, FromRow, PgPool, Postgres};

use crate::error::DatabaseError;

/// Ordered input parameters for one statement or routine invocation
///
/// Encoding happens eagerly; an encode failure is carried until execution
/// so call sites stay free of per-bind error handling.
#[derive(Default)]
pub struct Params {
    args: PgArguments,
    error: Option<String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a typed parameter
    pub fn add<'q, T>(mut self, value: T) -> Self
    where
        T: 'q + sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres>,
    {
        if self.error.is_none() {
            if let Err(e) = self.args.add(value) {
                self.error = Some(e.to_string());
            }
        }
        self
    }

    fn into_arguments(self) -> Result<PgArguments, DatabaseError> {
        match self.error {
            None => Ok(self.args),
            Some(message) => Err(DatabaseError::QueryFailed(format!(
                "Failed to encode parameter: {}",
                message
            ))),
        }
    }
}

/// Thin execution seam over the connection pool
#[derive(Debug, Clone)]
pub struct SqlGateway {
    pool: PgPool,
}

impl SqlGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool, for health checks and tests
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Executes a statement returning a single scalar value
    pub async fn fetch_scalar<T>(&self, sql: &str, params: Params) -> Result<T, DatabaseError>
    where
        T: Send + Unpin,
        (T,): Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let args = params.into_arguments()?;
        Ok(sqlx::query_scalar_with(sql, args)
            .fetch_one(&self.pool)
            .await?)
    }

    /// Invokes a statement or routine expected to yield exactly one row
    pub async fn call_one<R>(&self, sql: &str, params: Params) -> Result<R, DatabaseError>
    where
        R: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let args = params.into_arguments()?;
        Ok(sqlx::query_as_with(sql, args).fetch_one(&self.pool).await?)
    }

    /// Fetches at most one row
    pub async fn fetch_optional<R>(
        &self,
        sql: &str,
        params: Params,
    ) -> Result<Option<R>, DatabaseError>
    where
        R: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let args = params.into_arguments()?;
        Ok(sqlx::query_as_with(sql, args)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Fetches every row the statement or routine yields
    pub async fn fetch_all<R>(&self, sql: &str, params: Params) -> Result<Vec<R>, DatabaseError>
    where
        R: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let args = params.into_arguments()?;
        Ok(sqlx::query_as_with(sql, args).fetch_all(&self.pool).await?)
    }

    /// Executes a statement or void routine, returning the affected row count
    pub async fn execute(&self, sql: &str, params: Params) -> Result<u64, DatabaseError> {
        let args = params.into_arguments()?;
        Ok(sqlx::query_with(sql, args)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }
}
