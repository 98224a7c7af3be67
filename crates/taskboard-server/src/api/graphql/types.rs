//! GraphQL type definitions
//!
//! Plain data shapes plus the total mapping functions that build them from
//! database rows. Field resolvers live in `resolver.rs`.

use crate::storage::{LocationRow, TaskRow};
use async_graphql::{ID, Union};

/// A named place. Names are unique across all locations.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: ID,
    pub name: String,
}

impl Location {
    /// Map a database row to the API shape.
    pub fn marshal(row: &LocationRow) -> Self {
        Self {
            id: ID::from(row.id.to_string()),
            name: row.name.clone(),
        }
    }
}

/// A named work item, optionally attached to one location.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: ID,
    pub name: String,
    pub location: Option<Location>,
}

impl Task {
    /// Map a database row (with its eagerly loaded location, if any) to the
    /// API shape.
    pub fn marshal(row: &TaskRow, location: Option<&LocationRow>) -> Self {
        Self {
            id: ID::from(row.id.to_string()),
            name: row.name.clone(),
            location: location.map(Location::marshal),
        }
    }
}

/// Fixed-text result variant for `addTask` with an unknown location name.
#[derive(Debug, Clone)]
pub struct LocationNotFound {
    pub message: String,
}

impl Default for LocationNotFound {
    fn default() -> Self {
        Self {
            message: "Location with this name does not exist".to_string(),
        }
    }
}

/// Fixed-text result variant for `addLocation` with a taken name.
#[derive(Debug, Clone)]
pub struct LocationExists {
    pub message: String,
}

impl Default for LocationExists {
    fn default() -> Self {
        Self {
            message: "Location with this name already exist".to_string(),
        }
    }
}

/// Two-outcome result of `addTask`.
#[derive(Union)]
pub enum AddTaskResponse {
    Task(Task),
    LocationNotFound(LocationNotFound),
}

/// Two-outcome result of `addLocation`.
#[derive(Union)]
pub enum AddLocationResponse {
    Location(Location),
    LocationExists(LocationExists),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_location() {
        let row = LocationRow {
            id: 7,
            name: "Depot".to_string(),
        };
        let location = Location::marshal(&row);
        assert_eq!(location.id.as_str(), "7");
        assert_eq!(location.name, "Depot");
    }

    #[test]
    fn test_marshal_task_without_location() {
        let row = TaskRow {
            id: 3,
            name: "Sweep".to_string(),
            location_id: None,
        };
        let task = Task::marshal(&row, None);
        assert_eq!(task.id.as_str(), "3");
        assert_eq!(task.name, "Sweep");
        assert!(task.location.is_none());
    }

    #[test]
    fn test_marshal_task_nests_location() {
        let loc = LocationRow {
            id: 1,
            name: "Dock".to_string(),
        };
        let row = TaskRow {
            id: 2,
            name: "Unload".to_string(),
            location_id: Some(1),
        };
        let task = Task::marshal(&row, Some(&loc));
        assert_eq!(task.location.unwrap().name, "Dock");
    }

    #[test]
    fn test_fixed_variant_messages() {
        assert_eq!(
            LocationNotFound::default().message,
            "Location with this name does not exist"
        );
        assert_eq!(
            LocationExists::default().message,
            "Location with this name already exist"
        );
    }
}
