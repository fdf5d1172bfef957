//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Target URL scheme validation

pub mod code_generator;
pub mod url_validator;
