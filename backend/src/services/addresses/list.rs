//! # Address Listing Service
//!
//! Backend logic of `GET /api/addresses`.
//!
//! ## Workflow
//!
//! 1.  **Query**: `AddressStore::list_all` reads every document of the
//!     collection, in insertion order. There is no paging or filtering.
//!
//! 2.  **HTTP Response**: `200 OK` with the records as a JSON array, or
//!     `500 Internal Server Error` with `{"error"}` on a store fault.

use crate::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::ErrorResponse;
use log::error;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_all().await {
        Ok(addresses) => HttpResponse::Ok().json(addresses),
        Err(e) => {
            error!("Failed to list addresses: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e))
        }
    }
}
