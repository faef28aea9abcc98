use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotelpro::config::Config;
use hotelpro::storage::Storage;
use hotelpro::{handlers, seed};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let storage = hotelpro::open_storage(&config)
        .await
        .map_err(std::io::Error::other)?;

    if config.seed {
        if let Err(e) = seed::seed_database(storage.as_ref()).await {
            log::error!("Error seeding database: {e}");
        }
    }

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let storage_data: web::Data<dyn Storage> = web::Data::from(storage);

    HttpServer::new(move || {
        App::new()
            .app_data(storage_data.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
