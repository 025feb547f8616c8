//! # lpview-api - SpaceX REST API Client
//!
//! Issues the two GET requests Launchpad Viewer needs and validates every
//! response at the boundary, so the rest of the application only ever sees
//! well-formed [`lpview_core::Launchpad`] and [`lpview_core::Launch`] records.
//!
//! Depends on [`lpview_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`LaunchApi`] - Async trait implemented by the HTTP client and test fakes
//! - [`SpacexClient`] - reqwest-backed client with a configurable base URL and timeout
//! - [`ClientOptions`] - Construction options for [`SpacexClient`]
//!
//! ### Endpoints
//! - [`Endpoint`] - The two fixed endpoint shapes and their URL construction
//!
//! ### Wire Format
//! - [`parse_launchpads()`] - Parse and validate the launchpad list body
//! - [`parse_launch()`] - Parse and validate a single launch body

pub mod client;
pub mod endpoint;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod wire;

pub use client::{ClientOptions, LaunchApi, LocalLaunchApi, SpacexClient, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use wire::{parse_launch, parse_launchpads};
