#[cfg(test)]
mod tests {
    use crate::errors::ItemsError;

    #[test]
    fn test_invalid_id_format_message() {
        let err = ItemsError::invalid_id_format();
        assert!(matches!(err, ItemsError::BadRequest(_)));
        assert_eq!(err.message(), "Invalid ID format");
    }

    #[test]
    fn test_required_field_wording_differs_between_create_and_update() {
        // Asymmetric on purpose; clients test against the exact strings
        let create_err = ItemsError::note_required();
        let update_err = ItemsError::name_required();

        assert_eq!(create_err.message(), "Note is required");
        assert_eq!(update_err.message(), "Name is required");
        assert!(matches!(create_err, ItemsError::BadRequest(_)));
        assert!(matches!(update_err, ItemsError::BadRequest(_)));
    }

    #[test]
    fn test_item_not_found_message() {
        let err = ItemsError::item_not_found();
        assert!(matches!(err, ItemsError::NotFound(_)));
        assert_eq!(err.message(), "Item not found");
    }

    #[test]
    fn test_storage_failure_messages_are_operation_specific() {
        assert_eq!(ItemsError::fetch_items_failed().message(), "Failed to fetch items");
        assert_eq!(ItemsError::fetch_item_failed().message(), "Failed to fetch item");
        assert_eq!(ItemsError::create_item_failed().message(), "Failed to create item");
        assert_eq!(ItemsError::update_item_failed().message(), "Failed to update item");
        assert_eq!(ItemsError::delete_item_failed().message(), "Failed to delete item");
    }

    #[test]
    fn test_storage_failures_are_internal_errors() {
        assert!(matches!(ItemsError::fetch_items_failed(), ItemsError::InternalError(_)));
        assert!(matches!(ItemsError::create_item_failed(), ItemsError::InternalError(_)));
        assert!(matches!(ItemsError::update_item_failed(), ItemsError::InternalError(_)));
        assert!(matches!(ItemsError::delete_item_failed(), ItemsError::InternalError(_)));
    }
}
