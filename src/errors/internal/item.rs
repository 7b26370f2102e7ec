use thiserror::Error;

/// Domain errors for item store operations
#[derive(Error, Debug)]
pub enum ItemError {
    /// No row exists for the given id, whether it never existed or was
    /// already deleted
    #[error("Item not found: {0}")]
    NotFound(i32),
}
