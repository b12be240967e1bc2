pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use std::error::Error;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::product_service::{DynProductRepository, ProductService};
use application::report_service::ReportService;
use domain::report::SalesTable;
use infrastructure::product_repo::DieselProductRepository;
use openapi::ApiDoc;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    if !applied.is_empty() {
        log::info!("Applied {} migration(s)", applied.len());
    }
    Ok(())
}

/// Application services shared by every worker.
#[derive(Clone)]
pub struct Services {
    pub products: ProductService,
    pub reports: ReportService,
}

impl Services {
    pub fn new(repo: DynProductRepository, sales: SalesTable) -> Self {
        let products = ProductService::new(repo);
        let reports = ReportService::new(products.clone(), Arc::new(sales));
        Self { products, reports }
    }

    /// Diesel-backed services with the fixed 30-day sales figures.
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(DieselProductRepository::new(pool)),
            SalesTable::last_thirty_days(),
        )
    }
}

/// Registers routes, shared state and extractor error handlers.
pub fn configure(services: Services) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(services.products))
            .app_data(web::Data::new(services.reports))
            .app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(errors::query_error_handler))
            .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
            .service(
                web::scope("/products")
                    .route("", web::get().to(handlers::products::list_products))
                    .route("", web::post().to(handlers::products::create_product))
                    .route("/{id}", web::get().to(handlers::products::get_product))
                    .route("/{id}", web::put().to(handlers::products::update_product))
                    .route("/{id}", web::delete().to(handlers::products::delete_product))
                    .route(
                        "/{id}/reports",
                        web::get().to(handlers::reports::generate_report),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    services: Services,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure(services.clone()))
    })
    .bind((host.to_string(), port))?
    .run())
}
