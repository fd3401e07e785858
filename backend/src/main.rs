use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use address_api::config::Config;
use address_api::store::AddressStore;
use address_api::uploads::FileStore;
use address_api::AppState;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    // A missing or unreachable database does not stop the server from listening.
    let store = match config.db_connect.as_deref() {
        Some(uri) => AddressStore::connect(uri).unwrap_or_else(|e| {
            error!("Database connection failed: {}", e);
            AddressStore::disconnected()
        }),
        None => {
            error!("DB_CONNECT is not set, running without a database");
            AddressStore::disconnected()
        }
    };
    let files = FileStore::open(&config.upload_dir)?;
    let state = AppState { store, files };

    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(|cfg| address_api::configure(cfg, state))
    })
    .bind((config.host.as_str(), config.port))?;

    info!("Server is started on {}:{}", config.host, config.port);
    server.run().await
}
