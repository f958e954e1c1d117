use actix_files::Files;
use actix_web::web::Data;
use actix_web::{middleware::Logger, App, HttpServer};

use uttoron::catalog::Catalog;
use uttoron::config::SiteConfig;
use uttoron::web;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = SiteConfig::from_env().expect("Invalid site configuration");

    // A broken feed must not take the site down; pages fall back to their
    // empty states until the next deploy fixes the file.
    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{e}; serving with an empty catalog");
            Catalog::empty()
        }
    };
    log::info!(
        "Catalog loaded: {} courses, {} faculty, {} videos",
        catalog.courses.len(),
        catalog.faculty.len(),
        catalog.videos.len()
    );

    let bind_addr = config.bind_addr.clone();
    let state = Data::new(web::AppState::build(config, catalog));

    log::info!("Uttoron Academy site listening on {bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(web::middleware::SecurityHeaders)
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(actix_web::web::to(web::handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
