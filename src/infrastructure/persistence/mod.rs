//! Record store implementations.
//!
//! - [`MongoUrlRepository`] - MongoDB collection, used in production
//! - [`InMemoryUrlRepository`] - Process-local store for tests and local runs

pub mod memory_url_repository;
pub mod mongo_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use mongo_url_repository::MongoUrlRepository;
