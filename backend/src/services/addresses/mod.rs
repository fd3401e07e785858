//! # Address Service Module
//!
//! This module aggregates the endpoints that manage address records. It acts as
//! a router, directing requests under `/api/addresses` to the handler of each
//! sub-module.
//!
//! ## Sub-modules:
//! - `list`: returns every stored address.
//! - `create`: creates an address from a JSON body or a multipart form.
//! - `update`: merges fields into an existing address.
//! - `delete`: removes an address.
//! - `body`: lenient JSON body reading shared by `create` and `update`.
//!
//! Each handler formats its own failures as `{"error": "<message>"}`.

mod body;
mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, resource, scope};
use actix_web::Scope;

/// The base path for all address endpoints.
const API_PATH: &str = "/api/addresses";

/// Configures and returns the Actix `Scope` for all address routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns every stored address as a JSON array, in
///       insertion order.
///
/// *   **`POST /`**:
///     - **Handler**: `create::process`
///     - **Description**: Creates an address from a JSON body or a
///       `multipart/form-data` form. The optional `image` file part is written
///       to the upload directory and its metadata is stored with the record.
///
/// *   **`PUT /{id}`**:
///     - **Handler**: `update::process`
///     - **Description**: Merges a JSON object of fields into the address and
///       returns the merged record, or `null` when the id is unknown.
///
/// *   **`DELETE /{id}`**:
///     - **Handler**: `delete::process`
///     - **Description**: Deletes the address. Succeeds even when the id is
///       unknown; the uploaded file is kept.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(list::process))
                .route(post().to(create::process)),
        )
        .service(
            resource("/{id}")
                .route(put().to(update::process))
                .route(delete().to(delete::process)),
        )
}
