//! # Certgate Core
//!
//! Core types, errors, and traits for the certgate certification gateway.
//!
//! This crate provides the foundational building blocks used by all other
//! certgate crates:
//!
//! - **Types**: the certification status domain type and its normalization
//!   rules
//! - **Errors**: error types with context
//! - **Constants**: service defaults (cache capacity, TTL, script path)
//! - **Traits**: the [`CertificationSource`] interface that decouples the
//!   HTTP layer from the node-query script
//!
//! ## Example
//!
//! ```rust
//! use certgate_core::CertStatus;
//!
//! // Raw query output is normalized into a status
//! let status = CertStatus::from_query_output(" True \n");
//! assert_eq!(status.as_str(), "True");
//!
//! let status = CertStatus::from_query_output("null");
//! assert!(status.is_not_certified());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{CertgateError, Result};
pub use traits::*;
pub use types::*;
