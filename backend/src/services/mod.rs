//! # Services Module
//!
//! HTTP endpoints of the backend, grouped by resource. Each sub-module exposes a
//! `configure_routes()` returning the actix `Scope` that `crate::configure`
//! mounts on the application.
//!
//! ## Sub-modules:
//! - `addresses`: create, list, update and delete address records under
//!   `/api/addresses`.

pub mod addresses;
