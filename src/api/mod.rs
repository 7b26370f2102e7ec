// API layer - HTTP endpoints
pub mod health;
pub mod helpers;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;
