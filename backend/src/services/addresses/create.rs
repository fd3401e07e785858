//! # Address Creation Service
//!
//! Backend logic of `POST /api/addresses`.
//!
//! ## Workflow
//!
//! 1.  **Body parsing**: `multipart/form-data` requests are read part by part.
//!     Text parts fill the `NewAddress` fields of the same name; the file part
//!     named `image` is streamed to the upload directory by the `FileStore`.
//!     Every other content type is read as a JSON object (an empty body yields
//!     an empty record).
//!
//! 2.  **Persistence**: the collected fields and the optional upload metadata
//!     are handed to `AddressStore::create`, which assigns the id.
//!
//! 3.  **HTTP Response**: `200 OK` with the stored record. A malformed body or a
//!     store fault gives `400 Bad Request`; a failed file write gives
//!     `500 Internal Server Error`. A request stream that breaks off, in a text
//!     part or in the file part, is a `400`. All use the `{"error"}` envelope.

use super::body::read_json;
use crate::store::StoreError;
use crate::uploads::{FileStore, UploadError};
use crate::AppState;
use actix_multipart::{Field, Multipart};
use actix_web::http::StatusCode;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Responder};
use common::model::address::AddressRecord;
use common::model::image::UploadedImage;
use common::requests::NewAddress;
use common::responses::ErrorResponse;
use futures_util::StreamExt;
use log::{error, info, warn};
use thiserror::Error;

/// Multipart field carrying the attachment.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Error)]
enum CreateError {
    #[error("{0}")]
    Body(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CreateError {
    fn status(&self) -> StatusCode {
        match self {
            // Request stream errors are client errors, file part included.
            CreateError::Upload(UploadError::Multipart(_)) => StatusCode::BAD_REQUEST,
            CreateError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CreateError::Body(_) | CreateError::Store(_) => StatusCode::BAD_REQUEST,
        }
    }
}

pub async fn process(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> impl Responder {
    match create_address(&req, payload, &state).await {
        Ok(record) => {
            info!("Created address {}", record.id);
            HttpResponse::Ok().json(record)
        }
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                error!("Failed to create address: {}", e);
            } else {
                warn!("Rejected address creation: {}", e);
            }
            HttpResponse::build(status).json(ErrorResponse::new(e))
        }
    }
}

async fn create_address(
    req: &HttpRequest,
    payload: web::Payload,
    state: &AppState,
) -> Result<AddressRecord, CreateError> {
    let (fields, upload) = if req.content_type().eq_ignore_ascii_case("multipart/form-data") {
        read_form(Multipart::new(req.headers(), payload), &state.files).await?
    } else {
        (read_json(payload).await.map_err(CreateError::Body)?, None)
    };

    Ok(state.store.create(fields, upload).await?)
}

/// Reads a multipart form, storing the `image` file part on the way.
///
/// A file part with an empty filename is what browsers send for an empty file
/// input and is skipped. Any other file part is rejected.
async fn read_form(
    mut payload: Multipart,
    files: &FileStore,
) -> Result<(NewAddress, Option<UploadedImage>), CreateError> {
    let mut fields = NewAddress::default();
    let mut upload: Option<UploadedImage> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| CreateError::Body(e.to_string()))?;
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().map(|f| f.to_string()),
            ),
            None => continue,
        };

        match filename {
            Some(filename) if filename.is_empty() => continue,
            Some(filename) => {
                if name != IMAGE_FIELD || upload.is_some() {
                    return Err(UploadError::UnexpectedField(name).into());
                }
                upload = Some(files.save(&mut field, &filename).await?);
            }
            None => {
                let value = read_text(&mut field).await?;
                fields
                    .set_form_value(&name, value)
                    .map_err(CreateError::Body)?;
            }
        }
    }

    Ok((fields, upload))
}

async fn read_text(field: &mut Field) -> Result<String, CreateError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| CreateError::Body(e.to_string()))?;
        bytes.extend_from_slice(&chunk);
    }
    String::from_utf8(bytes).map_err(|_| CreateError::Body("form field is not valid UTF-8".to_string()))
}
