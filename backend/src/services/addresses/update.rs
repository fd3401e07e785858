//! # Address Update Service
//!
//! Backend logic of `PUT /api/addresses/{id}`.
//!
//! ## Workflow
//!
//! 1.  **Body parsing**: the body is read as an `AddressPatch` JSON object. An
//!     empty body is an empty patch, so the record comes back unchanged.
//!     Unknown keys, `id` and `image` are rejected.
//!
//! 2.  **Merge**: `AddressStore::update_by_id` applies the patch to the stored
//!     document; keys the patch does not mention keep their value.
//!
//! 3.  **HTTP Response**:
//!     - `200 OK` with the merged record.
//!     - `200 OK` with `null` when no record has this id.
//!     - `400 Bad Request` with `{"error"}` for a malformed body or a store
//!       fault (including a malformed id).

use super::body::read_json;
use crate::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::AddressPatch;
use common::responses::ErrorResponse;
use log::warn;

pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Payload,
) -> impl Responder {
    let patch: AddressPatch = match read_json(payload).await {
        Ok(patch) => patch,
        Err(e) => {
            warn!("Rejected update of address {}: {}", id, e);
            return HttpResponse::BadRequest().json(ErrorResponse::new(e));
        }
    };

    match state.store.update_by_id(&id, patch).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            warn!("Failed to update address {}: {}", id, e);
            HttpResponse::BadRequest().json(ErrorResponse::new(e))
        }
    }
}
