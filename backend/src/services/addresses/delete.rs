//! # Address Deletion Service
//!
//! Backend logic of `DELETE /api/addresses/{id}`.
//!
//! ## Workflow
//!
//! 1.  **Removal**: `AddressStore::delete_by_id` removes the document if it
//!     exists. An unknown id is not an error.
//!
//! 2.  **HTTP Response**: `200 OK` with `{"message": "Address deleted"}`, or
//!     `500 Internal Server Error` with `{"error"}` on a store fault
//!     (including a malformed id).
//!
//! The uploaded image of the record, if any, stays in the upload directory.

use crate::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::responses::{ErrorResponse, MessageResponse};
use log::error;

pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    match state.store.delete_by_id(&id).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Address deleted")),
        Err(e) => {
            error!("Failed to delete address {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e))
        }
    }
}
