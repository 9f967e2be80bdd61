//! # taskdeck-remote - Remote Item Store
//!
//! Talks to the HTTP service that persists items for a single owner.
//!
//! Depends on [`taskdeck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`ItemStore`] - Async store contract (`Send` futures), with
//!   [`LocalItemStore`] as the single-threaded variant
//! - [`HttpItemStore`] - reqwest implementation of the JSON/HTTP contract
//! - `InMemoryItemStore` - Recording fake with failure injection
//!   (feature `test-helpers`)

pub mod http;
pub mod store;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use http::HttpItemStore;
pub use store::{ItemStore, LocalItemStore};
#[cfg(any(test, feature = "test-helpers"))]
pub use test_utils::{test_item, InMemoryItemStore, StoreCall, StoreOp};
