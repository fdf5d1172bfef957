//! # shorturl
//!
//! A small URL shortening service built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! The crate keeps layers separate:
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and the storage trait
//! - **Application Layer** ([`application`]) - Shortening, redirect and stats logic
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Behaviour
//!
//! - 7-character random codes over `[a-zA-Z0-9]` from the OS CSPRNG
//! - Links expire after a configurable window; expired links answer 410 Gone
//! - Each successful redirect bumps a click counter
//! - Statistics stay readable after expiry
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGO_URI="mongodb://localhost:27017"
//! export BASE_URL="http://localhost:8080"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{StorageError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
