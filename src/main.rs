use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use notes_backend::api::{HealthApi, ItemsApi};
use notes_backend::config::{init_database, init_logging, migrate_database, BootstrapSettings};
use notes_backend::stores::ItemStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env().expect("Failed to load bootstrap settings");

    // Connect to database and bring the schema up to date
    let db = init_database(settings.database_url())
        .await
        .expect("Failed to connect to database");

    migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Connected to database: {}", settings.database_url());

    // Single injectable store shared by the handlers
    let item_store = Arc::new(ItemStore::new(db));
    let items_api = ItemsApi::new(item_store);

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new((HealthApi, items_api), "Notes API", "1.0.0").server(
        format!(
            "http://{}:{}/api",
            settings.server_host(),
            settings.server_port()
        ),
    );

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let bind_addr = format!("{}:{}", settings.server_host(), settings.server_port());
    tracing::info!("Starting server on http://{}", bind_addr);
    tracing::info!(
        "Swagger UI available at http://{}:{}/swagger",
        settings.server_host(),
        settings.server_port()
    );

    Server::new(TcpListener::bind(bind_addr)).run(app).await
}
