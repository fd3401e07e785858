//! Data model shared by the address book service and its clients.
//!
//! - `model`: the persisted `AddressRecord` and its optional image attachment.
//! - `requests`: payloads accepted by the create and update endpoints.
//! - `responses`: the JSON envelopes returned besides records.

pub mod model;
pub mod requests;
pub mod responses;
