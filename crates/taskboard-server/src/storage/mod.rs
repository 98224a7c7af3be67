//! SQLite persistence layer
//!
//! Owns the process-wide connection pool and the two tables backing the API:
//! `locations` (unique names) and `tasks` (optional foreign key to a
//! location). Uniqueness and referential integrity are enforced by the
//! database, not by application code; this module only classifies the two
//! constraint outcomes callers are expected to recover from.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Storage error taxonomy.
///
/// The first two variants are expected, recoverable outcomes that the
/// mutation layer turns into typed GraphQL results. Everything else is an
/// unmodeled fault and surfaces through `Database`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A location with the requested name already exists (UNIQUE violation).
    #[error("location with this name already exists")]
    LocationExists,
    /// No location with the requested name exists.
    #[error("location with this name does not exist")]
    LocationNotFound,
    /// Any other database failure, passed through verbatim.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LocationRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub name: String,
    pub location_id: Option<i64>,
}

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open (or create) the database under `data_dir` and create the schema.
    ///
    /// Called once at startup; the returned pool is shared by every request.
    pub async fn new(data_dir: &Path) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(sqlx::Error::Io)?;
        let db_path = data_dir.join("taskboard.db");
        let opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .foreign_keys(true)
                .create_if_missing(true);

        let pool = SqlitePool::connect_with(opts).await?;
        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<(), StorageError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS locations (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT NOT NULL,
                location_id INTEGER REFERENCES locations(id)
            );
            ",
        )
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Close the connection pool. Any operation issued afterwards fails
    /// with a pool-closed error.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Round-trip ping used by the health endpoint.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new location. A name collision maps to `LocationExists`.
    pub async fn create_location(&self, name: &str) -> Result<LocationRow, StorageError> {
        let result = sqlx::query("INSERT INTO locations (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(LocationRow {
                id: done.last_insert_rowid(),
                name: name.to_string(),
            }),
            Err(e) => {
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    Err(StorageError::LocationExists)
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Insert a new task, optionally linked to the location named
    /// `location_name`. An unknown location name maps to `LocationNotFound`
    /// and inserts nothing.
    ///
    /// Locations are never deleted in this system, so the lookup-then-insert
    /// pair cannot lose the referenced row in between; the foreign key
    /// constraint still backstops the insert.
    pub async fn create_task(
        &self,
        name: &str,
        location_name: Option<&str>,
    ) -> Result<(TaskRow, Option<LocationRow>), StorageError> {
        let location = match location_name {
            Some(loc_name) => Some(
                self.find_location_by_name(loc_name)
                    .await?
                    .ok_or(StorageError::LocationNotFound)?,
            ),
            None => None,
        };

        let location_id = location.as_ref().map(|l| l.id);
        let done = sqlx::query("INSERT INTO tasks (name, location_id) VALUES (?, ?)")
            .bind(name)
            .bind(location_id)
            .execute(&self.pool)
            .await?;

        Ok((
            TaskRow {
                id: done.last_insert_rowid(),
                name: name.to_string(),
                location_id,
            },
            location,
        ))
    }

    pub async fn find_location_by_name(
        &self,
        name: &str,
    ) -> Result<Option<LocationRow>, StorageError> {
        let row = sqlx::query_as("SELECT id, name FROM locations WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// All locations, name descending.
    pub async fn list_locations(&self) -> Result<Vec<LocationRow>, StorageError> {
        let rows = sqlx::query_as("SELECT id, name FROM locations ORDER BY name DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// All tasks with their location eagerly joined, task name descending.
    pub async fn list_tasks(&self) -> Result<Vec<(TaskRow, Option<LocationRow>)>, StorageError> {
        let rows = sqlx::query(
            "SELECT t.id, t.name, t.location_id, l.name AS location_name
             FROM tasks t
             LEFT JOIN locations l ON l.id = t.location_id
             ORDER BY t.name DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in rows {
            let task = TaskRow {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                location_id: row.try_get("location_id")?,
            };
            let location = match (task.location_id, row.try_get::<Option<String>, _>("location_name")?)
            {
                (Some(id), Some(name)) => Some(LocationRow { id, name }),
                _ => None,
            };
            tasks.push((task, location));
        }
        Ok(tasks)
    }
}
