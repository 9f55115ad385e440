//! HTTP pipeline against the SecondServe backend.
//!
//! One generic client replaces the per-screen request boilerplate: header
//! building, status-code branching and error translation all live here.

mod client;
mod endpoints;
mod error;

pub use client::{ApiClient, Auth};
pub use endpoints::parse_quantity;
pub use error::{ApiError, ApiResult};
