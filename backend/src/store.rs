//! # Address Record Store
//!
//! Keeps every `AddressRecord` as a JSON document in the `myaddresses` table of a
//! SQLite database:
//!
//! ```sql
//! CREATE TABLE myaddresses (id TEXT PRIMARY KEY, document TEXT NOT NULL)
//! ```
//!
//! The table is used as a schema-less collection: the `document` column holds
//! the whole record, `id` only exists to look documents up. Listing returns
//! documents in insertion order.
//!
//! One connection is opened at startup and shared by all requests through
//! `AddressStore`, which is cloned into the application state. Each operation
//! takes the connection lock for its whole duration, so a single insert,
//! update or delete is atomic; nothing spans several operations. SQLite calls
//! block, so they run on the actix blocking pool via `web::block`.

use actix_web::error::BlockingError;
use actix_web::web;
use chrono::Utc;
use common::model::address::AddressRecord;
use common::model::image::{ImageMeta, UploadedImage};
use common::requests::{AddressPatch, NewAddress};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid address id \"{0}\"")]
    InvalidId(String),

    #[error("database is not connected")]
    Disconnected,

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("malformed address document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("database connection lock poisoned")]
    Poisoned,

    #[error("database task was cancelled: {0}")]
    Blocking(#[from] BlockingError),
}

/// Shared handle to the address collection.
#[derive(Clone)]
pub struct AddressStore {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl AddressStore {
    /// Opens the database named by `uri` and makes sure the collection exists.
    ///
    /// `uri` is a file path, `:memory:`, or either of those behind a
    /// `sqlite://` prefix.
    pub fn connect(uri: &str) -> Result<Self, StoreError> {
        let location = uri.strip_prefix("sqlite://").unwrap_or(uri);
        let conn = if location == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(location)?
        };
        conn.execute(
            "CREATE TABLE IF NOT EXISTS myaddresses (
                id TEXT PRIMARY KEY,
                document TEXT NOT NULL
            )",
            [],
        )?;
        info!("Database connected at {}", location);

        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// A store with no database behind it. Used when the startup connection
    /// fails so the server can still listen; every operation returns
    /// `StoreError::Disconnected`.
    pub fn disconnected() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }

    /// Inserts a new record with a freshly generated id.
    ///
    /// When an upload is given, its `created_at` is the creation time of the
    /// record.
    pub async fn create(
        &self,
        fields: NewAddress,
        upload: Option<UploadedImage>,
    ) -> Result<AddressRecord, StoreError> {
        self.run(move |conn| {
            let id = Uuid::new_v4().to_string();
            let image = upload.map(|upload| ImageMeta::from_upload(upload, Utc::now()));
            let record = AddressRecord::new(id, fields, image);

            conn.execute(
                "INSERT INTO myaddresses (id, document) VALUES (?1, ?2)",
                params![record.id, serde_json::to_string(&record)?],
            )?;
            debug!("Inserted address {}", record.id);
            Ok(record)
        })
        .await
    }

    /// Returns every record, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<AddressRecord>, StoreError> {
        self.run(|conn| {
            let mut stmt = conn.prepare("SELECT document FROM myaddresses ORDER BY rowid")?;
            let documents = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;

            documents
                .iter()
                .map(|document| serde_json::from_str(document).map_err(StoreError::from))
                .collect::<Result<Vec<AddressRecord>, StoreError>>()
        })
        .await
    }

    /// Merges `patch` into the record `id` and returns the merged record, or
    /// `None` when no record has that id.
    pub async fn update_by_id(
        &self,
        id: &str,
        patch: AddressPatch,
    ) -> Result<Option<AddressRecord>, StoreError> {
        let id = parse_id(id)?;
        self.run(move |conn| {
            let document: Option<String> = conn
                .query_row(
                    "SELECT document FROM myaddresses WHERE id = ?1",
                    params![id],
                    |row| row.get(0),
                )
                .optional()?;

            let Some(document) = document else {
                debug!("Update skipped, address {} not found", id);
                return Ok(None);
            };

            let mut record: AddressRecord = serde_json::from_str(&document)?;
            record.apply(patch);
            conn.execute(
                "UPDATE myaddresses SET document = ?1 WHERE id = ?2",
                params![serde_json::to_string(&record)?, id],
            )?;
            debug!("Updated address {}", id);
            Ok(Some(record))
        })
        .await
    }

    /// Removes the record `id` if it exists. Returns how many records were
    /// removed (0 or 1).
    pub async fn delete_by_id(&self, id: &str) -> Result<usize, StoreError> {
        let id = parse_id(id)?;
        self.run(move |conn| {
            let removed = conn.execute("DELETE FROM myaddresses WHERE id = ?1", params![id])?;
            debug!("Deleted {} address(es) with id {}", removed, id);
            Ok(removed)
        })
        .await
    }

    async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        web::block(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            let conn = guard.as_ref().ok_or(StoreError::Disconnected)?;
            op(conn)
        })
        .await?
    }
}

/// Ids are UUIDs; anything else is rejected before touching the database.
fn parse_id(id: &str) -> Result<String, StoreError> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| StoreError::InvalidId(id.to_string()))
}
