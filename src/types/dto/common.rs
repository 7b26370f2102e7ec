use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Standardized error response model
///
/// Every 400/404/500 response carries this single-field body.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
