use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, ApiResponse, OpenApi, Tags};

use crate::api::helpers::{parse_item_id, validate_name};
use crate::errors::internal::ItemError;
use crate::errors::{InternalError, ItemsError};
use crate::stores::ItemStore;
use crate::types::dto::items::{
    CreateItemRequest, DeleteItemResponse, Item, UpdateItemRequest,
};

/// Items API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given ItemStore
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

/// Response for a successful item creation
#[derive(ApiResponse, Debug)]
pub enum CreateItemResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<Item>),
}

#[OpenApi]
impl ItemsApi {
    /// List all items
    ///
    /// Returns every stored item ordered by creation time, newest first
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ItemsError> {
        let items = self.item_store.list().await.map_err(|e| {
            tracing::error!("Database error: {}", e);
            ItemsError::fetch_items_failed()
        })?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Get a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<Item>, ItemsError> {
        let item_id = parse_item_id(&id.0).ok_or_else(ItemsError::invalid_id_format)?;

        match self.item_store.get(item_id).await {
            Ok(item) => Ok(Json(item.into())),
            Err(InternalError::Item(ItemError::NotFound(_))) => {
                Err(ItemsError::item_not_found())
            }
            Err(e) => {
                tracing::error!("Database error: {}", e);
                Err(ItemsError::fetch_item_failed())
            }
        }
    }

    /// Create a new item
    ///
    /// Stores the trimmed note text and returns the created item with its
    /// assigned id and timestamp
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemResponse, ItemsError> {
        let name = validate_name(body.name.as_deref()).ok_or_else(ItemsError::note_required)?;

        // Any failure past validation is a create failure, including the
        // re-read missing its row after a concurrent delete
        match self.item_store.create(&name).await {
            Ok(item) => Ok(CreateItemResponse::Created(Json(item.into()))),
            Err(e) => {
                tracing::error!("Database error: {}", e);
                Err(ItemsError::create_item_failed())
            }
        }
    }

    /// Update an item's name
    ///
    /// The id is validated before the body is inspected; a malformed id is
    /// a request-shape error regardless of the payload
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ItemsError> {
        let item_id = parse_item_id(&id.0).ok_or_else(ItemsError::invalid_id_format)?;
        let name = validate_name(body.name.as_deref()).ok_or_else(ItemsError::name_required)?;

        match self.item_store.update(item_id, &name).await {
            Ok(item) => Ok(Json(item.into())),
            Err(InternalError::Item(ItemError::NotFound(_))) => {
                Err(ItemsError::item_not_found())
            }
            Err(e) => {
                tracing::error!("Database error: {}", e);
                Err(ItemsError::update_item_failed())
            }
        }
    }

    /// Delete an item by id
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(
        &self,
        id: Path<String>,
    ) -> Result<Json<DeleteItemResponse>, ItemsError> {
        let item_id = parse_item_id(&id.0).ok_or_else(ItemsError::invalid_id_format)?;

        match self.item_store.delete(item_id).await {
            Ok(()) => Ok(Json(DeleteItemResponse {
                message: "Item deleted successfully".to_string(),
            })),
            Err(InternalError::Item(ItemError::NotFound(_))) => {
                Err(ItemsError::item_not_found())
            }
            Err(e) => {
                tracing::error!("Database error: {}", e);
                Err(ItemsError::delete_item_failed())
            }
        }
    }
}
