//! Gateway Error Module
//!
//! This module defines the error types used across the gateway and their
//! conversions to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All handlers return `Result<_, GatewayError>`; the `IntoResponse`
//! implementation in `conversion` turns any error into a JSON body of the
//! shape `{"error": "..."}` with a non-2xx status.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::GatewayError;
