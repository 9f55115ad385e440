//! Core pipeline for the SecondServe client: session, config, DTOs and the
//! API client every screen goes through.

pub mod api;
pub mod config;
pub mod dto;
pub mod session;

pub use api::{ApiClient, ApiError, ApiResult, Auth};
pub use config::{Config, RefreshFailurePolicy};
pub use session::{Session, SessionStore, UserRole};
