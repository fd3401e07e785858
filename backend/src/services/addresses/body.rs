//! JSON body reading shared by the create and update handlers.
//!
//! Bodies are parsed whatever the `Content-Type` header says, and an empty
//! body reads as the type's default (an empty record on create, a no-op merge
//! on update).

use crate::JSON_LIMIT;
use actix_web::web;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;

pub(super) async fn read_json<T>(mut payload: web::Payload) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| e.to_string())?;
        if body.len() + chunk.len() > JSON_LIMIT {
            return Err(format!("JSON payload is larger than {} bytes", JSON_LIMIT));
        }
        body.extend_from_slice(&chunk);
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(&body).map_err(|e| e.to_string())
}
