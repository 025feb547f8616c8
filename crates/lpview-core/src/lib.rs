//! # lpview-core - Core Domain Types
//!
//! Foundation crate for Launchpad Viewer. Provides the launchpad/launch
//! domain records, their display formatting, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Launchpad`] - A launch site with status and its launch identifiers
//! - [`Launch`] - A single flight record
//! - [`CoreRecord`] - One booster used by a launch
//! - [`LaunchId`] - Opaque, non-blank launch identifier
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `retryable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lpview_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{
    CoreRecord, Launch, LaunchId, Launchpad, DATE_DISPLAY_LEN, DETAILS_FALLBACK,
    NO_LAUNCHES_MESSAGE, TOP_LAUNCHES_LIMIT,
};
