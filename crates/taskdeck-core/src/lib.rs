//! # taskdeck-core - Core Domain Types
//!
//! Foundation crate for taskdeck. Provides the item entity, view filtering,
//! user-facing error kinds, the infrastructure error type and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Item`] - A single task record as stored remotely
//! - [`ItemId`] - Server-assigned identifier ([`PLACEHOLDER_ID`] is reserved)
//! - [`NewItem`] - Creation payload (an item without id)
//! - [`ItemPatch`] - Partial update of exactly one field
//! - [`FilterMode`] / [`filter_items()`] - All / Active / Completed view
//! - [`ErrorKind`] - Transient, user-visible failure category
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum; store failures are `recoverable`
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use taskdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all taskdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    filter_items, ErrorKind, FilterMode, Item, ItemField, ItemId, ItemPatch, NewItem, OwnerId,
    PLACEHOLDER_ID,
};
