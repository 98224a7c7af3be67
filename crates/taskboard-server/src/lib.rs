//! Taskboard Server - GraphQL API for tasks and locations
//!
//! Provides a single GraphQL endpoint:
//! - POST /graphql - Execute GraphQL queries and mutations
//! - GET /graphql - GraphQL playground (debug builds)
//! - GET /health - Health check with database ping
//!
//! The API exposes two entities backed by SQLite: `Location` (unique name)
//! and `Task` (optionally attached to one location). All constraint
//! enforcement is delegated to the database; the mutation layer only
//! translates the two expected constraint outcomes into typed union results.

pub mod api;
pub mod config;
pub mod storage;

use storage::Storage;

/// Taskboard server state
///
/// Shared by every request handler; the storage pool inside is Arc-backed
/// and cheap to clone.
#[derive(Clone)]
pub struct TaskboardServer {
    /// SQLite-backed persistence layer
    pub storage: Storage,
}

impl TaskboardServer {
    /// Create a new Taskboard server instance
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}
