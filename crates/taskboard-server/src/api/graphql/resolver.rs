//! GraphQL field resolvers
//!
//! Field-level resolvers for the API value types. Everything here reads from
//! values already materialized by the storage layer; no resolver touches the
//! database.

use crate::api::graphql::types::*;
use async_graphql::{ID, Object};

#[Object]
impl Location {
    async fn id(&self) -> &ID {
        &self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }
}

#[Object]
impl Task {
    async fn id(&self) -> &ID {
        &self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }

    /// The location this task is attached to, if any.
    async fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

#[Object]
impl LocationNotFound {
    async fn message(&self) -> &str {
        &self.message
    }
}

#[Object]
impl LocationExists {
    async fn message(&self) -> &str {
        &self.message
    }
}
