use poem_openapi::{payload::Json, ApiResponse};

use crate::types::dto::common::ErrorResponse;

/// Item endpoint error types
///
/// Client-visible messages are part of the API contract; handlers build
/// them through the constructors below rather than inline strings.
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// Malformed identifier or missing required field
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// No item exists for the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Unexpected storage failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemsError {
    /// Create an invalid-ID-format error
    pub fn invalid_id_format() -> Self {
        ItemsError::BadRequest(Json(ErrorResponse {
            error: "Invalid ID format".to_string(),
        }))
    }

    /// Create a missing-note error for the create path
    pub fn note_required() -> Self {
        ItemsError::BadRequest(Json(ErrorResponse {
            error: "Note is required".to_string(),
        }))
    }

    /// Create a missing-name error for the update path
    ///
    /// Wording differs from the create path's [`ItemsError::note_required`];
    /// both strings are contract-tested.
    pub fn name_required() -> Self {
        ItemsError::BadRequest(Json(ErrorResponse {
            error: "Name is required".to_string(),
        }))
    }

    /// Create an item-not-found error
    pub fn item_not_found() -> Self {
        ItemsError::NotFound(Json(ErrorResponse {
            error: "Item not found".to_string(),
        }))
    }

    /// Create a generic fetch failure for the list path
    pub fn fetch_items_failed() -> Self {
        ItemsError::InternalError(Json(ErrorResponse {
            error: "Failed to fetch items".to_string(),
        }))
    }

    /// Create a generic fetch failure for the single-item path
    pub fn fetch_item_failed() -> Self {
        ItemsError::InternalError(Json(ErrorResponse {
            error: "Failed to fetch item".to_string(),
        }))
    }

    /// Create a generic create failure
    pub fn create_item_failed() -> Self {
        ItemsError::InternalError(Json(ErrorResponse {
            error: "Failed to create item".to_string(),
        }))
    }

    /// Create a generic update failure
    pub fn update_item_failed() -> Self {
        ItemsError::InternalError(Json(ErrorResponse {
            error: "Failed to update item".to_string(),
        }))
    }

    /// Create a generic delete failure
    pub fn delete_item_failed() -> Self {
        ItemsError::InternalError(Json(ErrorResponse {
            error: "Failed to delete item".to_string(),
        }))
    }

    /// The client-visible message carried by this error
    pub fn message(&self) -> &str {
        match self {
            ItemsError::BadRequest(Json(body)) => &body.error,
            ItemsError::NotFound(Json(body)) => &body.error,
            ItemsError::InternalError(Json(body)) => &body.error,
        }
    }
}
