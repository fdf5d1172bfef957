//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! - [`persistence`] - MongoDB and in-memory repository implementations

pub mod persistence;
