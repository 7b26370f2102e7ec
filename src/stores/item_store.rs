use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::errors::internal::ItemError;
use crate::errors::InternalError;
use crate::types::db::item;

/// ItemStore executes the CRUD operations for items
///
/// Owns an injected database connection; every operation is stateless
/// between calls, all state lives in the database. Callers are expected to
/// validate input first - the store receives parsed ids and trimmed names.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all items, newest first
    ///
    /// Ordered by `created_at` descending. Same-second ties fall back to
    /// the engine's natural scan order and carry no further guarantee.
    ///
    /// # Returns
    /// * `Ok(Vec<Model>)` - All items, possibly empty
    /// * `Err(InternalError)` - Database error
    pub async fn list(&self) -> Result<Vec<item::Model>, InternalError> {
        item::Entity::find()
            .order_by_desc(item::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Get a single item by id
    ///
    /// # Returns
    /// * `Ok(Model)` - The item
    /// * `Err(InternalError)` - Database error, or `ItemError::NotFound`
    pub async fn get(&self, id: i32) -> Result<item::Model, InternalError> {
        item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_item", e))?
            .ok_or_else(|| ItemError::NotFound(id).into())
    }

    /// Create a new item with the given (already trimmed) name
    ///
    /// The database assigns the id; `created_at` is stamped here at insert
    /// time. The row is then re-read by its assigned id and returned. The
    /// insert and the re-read are separate statements, not a transaction;
    /// a concurrent delete between the two leaves the re-read empty.
    ///
    /// # Returns
    /// * `Ok(Model)` - The newly created item as stored
    /// * `Err(InternalError)` - Database error at either statement
    pub async fn create(&self, name: &str) -> Result<item::Model, InternalError> {
        let new_item = item::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        let insert = item::Entity::insert(new_item)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        self.get(insert.last_insert_id).await
    }

    /// Update an item's name
    ///
    /// Issues a single UPDATE matching by id. Zero rows affected means the
    /// id references no existing row, whether it never existed or was
    /// already deleted. On success the row is re-read and returned; like
    /// create, the two statements are not wrapped in a transaction.
    ///
    /// # Returns
    /// * `Ok(Model)` - The updated item as stored
    /// * `Err(InternalError)` - Database error, or `ItemError::NotFound`
    pub async fn update(&self, id: i32, name: &str) -> Result<item::Model, InternalError> {
        let result = item::Entity::update_many()
            .col_expr(item::Column::Name, Expr::value(name))
            .filter(item::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_item", e))?;

        if result.rows_affected == 0 {
            return Err(ItemError::NotFound(id).into());
        }

        self.get(id).await
    }

    /// Delete an item by id
    ///
    /// # Returns
    /// * `Ok(())` - The item was deleted
    /// * `Err(InternalError)` - Database error, or `ItemError::NotFound`
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(ItemError::NotFound(id).into());
        }

        Ok(())
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
