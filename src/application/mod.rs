//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation and business rules, and
//! expose a small API to HTTP handlers.
//!
//! - [`services::url_service::UrlService`] - Shortening, redirect resolution and statistics

pub mod services;
