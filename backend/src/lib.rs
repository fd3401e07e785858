//! REST backend of the address book.
//!
//! `configure` mounts every route on an actix `App`; `main` builds the
//! `AppState` from the environment and runs the server.

pub mod config;
pub mod services;
pub mod store;
pub mod uploads;

use actix_web::web;
use store::AddressStore;
use uploads::FileStore;

/// Largest JSON body accepted by the address endpoints (10 MB).
pub const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// Handles shared by every request, injected as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub store: AddressStore,
    pub files: FileStore,
}

/// Registers the address API and the static `/uploads` service.
pub fn configure(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state.clone()))
        .service(services::addresses::configure_routes())
        .service(state.files.service());
}
