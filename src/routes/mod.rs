//! Routes Module
//!
//! The thin HTTP surface over the authorizer and the broker client:
//!
//! - **`router`** - route table and fallback
//! - **`handlers`** - request handlers
//! - **`assets`** - embedded demo page and client script

pub mod assets;
pub mod handlers;
pub mod router;

pub use router::create_router;
