use actix_web::{middleware::Logger, web, App, HttpServer};
use core_auth::config::config;
use core_auth::db::database_service::DatabaseService;
use core_auth::routes::configure_routes;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = config();
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url, config.db_max_connections)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?,
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
