//! GraphQL query resolvers

use crate::TaskboardServer;
use crate::api::graphql::types::*;
use async_graphql::{Context, Object, Result as GQLResult};
use std::sync::Arc;

/// Root query type for GraphQL
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All tasks with their location eagerly included, ordered by name
    /// descending.
    async fn tasks(&self, ctx: &Context<'_>) -> GQLResult<Vec<Task>> {
        let server = ctx.data::<Arc<TaskboardServer>>()?;

        let rows = server.storage.list_tasks().await?;
        Ok(rows
            .iter()
            .map(|(task, location)| Task::marshal(task, location.as_ref()))
            .collect())
    }

    /// All locations, ordered by name descending.
    async fn locations(&self, ctx: &Context<'_>) -> GQLResult<Vec<Location>> {
        let server = ctx.data::<Arc<TaskboardServer>>()?;

        let rows = server.storage.list_locations().await?;
        Ok(rows.iter().map(Location::marshal).collect())
    }
}
