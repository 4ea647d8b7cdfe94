//! # roster-api
//!
//! HTTP client for the students REST service.
//!
//! The service exposes a flat CRUD surface:
//! - `GET /students` — list all records.
//! - `GET /students/{id}` — fetch one record.
//! - `DELETE /students/{id}` — remove one record (no response body assumed).
//!
//! The [`client::StudentDirectory`] trait is the seam between the network
//! and the UI layer; screens hold a `dyn StudentDirectory` so tests can
//! drive them with an in-memory fake.

pub mod client;
pub mod error;

pub use client::{StudentDirectory, StudentsClient};
pub use error::{ApiError, Result};
