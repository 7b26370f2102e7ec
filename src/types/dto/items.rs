use chrono::DateTime;
use poem_openapi::Object;

use crate::types::db::item;

/// Request model for creating a new item
///
/// The name is optional at the wire level so a missing field reaches the
/// handler's own validation instead of the framework's parser.
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Note text; trimmed before storage
    pub name: Option<String>,
}

/// Request model for updating an existing item
#[derive(Object, Debug)]
pub struct UpdateItemRequest {
    /// Replacement name; trimmed before storage
    pub name: Option<String>,
}

/// Response model representing an item
#[derive(Object, Debug)]
pub struct Item {
    /// Unique identifier for the item
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        let created_at = DateTime::from_timestamp(model.created_at, 0)
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            created_at,
        }
    }
}

/// Response model for a successful delete
#[derive(Object, Debug)]
pub struct DeleteItemResponse {
    /// Confirmation message
    pub message: String,
}
