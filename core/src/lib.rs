//! Typed REST client for the mining-operations backend.
//!
//! # Overview
//! One [`Api`] value, built from an explicitly passed [`ApiConfig`], exposes
//! a service per backend resource (users, entities, contracts, mines,
//! monthly production and expense records, invoices, claims, and the
//! auxiliary `/express` set). Each operation builds a plain-data
//! [`ApiRequest`] descriptor and hands it to the [`Http`] executor.
//!
//! # Design
//! - Request construction is pure and unit-testable; the network boundary
//!   is confined to [`transport`].
//! - One network call per operation — no retries, no caching, no client-side
//!   queue. Dropping a pending future aborts the underlying call.
//! - DTOs are structural shapes with partial-patch update semantics; backend
//!   invariants (role sets, month ranges, required fields) are not
//!   re-validated client-side, and backend errors are forwarded verbatim.

pub mod config;
pub mod error;
pub mod request;
pub mod services;
pub mod transport;
pub mod types;

pub use config::{ApiConfig, StaticToken, TokenSource};
pub use error::ApiError;
pub use request::{ApiRequest, Body, Method};
pub use services::{Api, QueryParams};
pub use transport::Http;
pub use types::Page;
