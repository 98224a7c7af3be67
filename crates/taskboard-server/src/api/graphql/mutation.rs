//! GraphQL mutations for creating tasks and locations
//!
//! The two expected constraint outcomes (duplicate location name, unknown
//! location name) are recovered here and returned as union variants in the
//! data channel. Any other storage failure propagates through `?` into the
//! GraphQL `errors` array.

use crate::TaskboardServer;
use crate::api::graphql::types::*;
use crate::storage::StorageError;
use async_graphql::{Context, Object, Result as GQLResult};
use std::sync::Arc;

/// Root mutation type for GraphQL
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new task, optionally attached to an existing location
    /// identified by name.
    async fn add_task(
        &self,
        ctx: &Context<'_>,
        name: String,
        location_name: Option<String>,
    ) -> GQLResult<AddTaskResponse> {
        let server = ctx.data::<Arc<TaskboardServer>>()?;

        match server
            .storage
            .create_task(&name, location_name.as_deref())
            .await
        {
            Ok((task, location)) => Ok(AddTaskResponse::Task(Task::marshal(
                &task,
                location.as_ref(),
            ))),
            Err(StorageError::LocationNotFound) => {
                Ok(AddTaskResponse::LocationNotFound(LocationNotFound::default()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create a new location. Location names are unique.
    async fn add_location(&self, ctx: &Context<'_>, name: String) -> GQLResult<AddLocationResponse> {
        let server = ctx.data::<Arc<TaskboardServer>>()?;

        match server.storage.create_location(&name).await {
            Ok(location) => Ok(AddLocationResponse::Location(Location::marshal(&location))),
            Err(StorageError::LocationExists) => {
                Ok(AddLocationResponse::LocationExists(LocationExists::default()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
