//! Core domain types for tidy.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the workspace.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod error;
mod nested;
mod policy;
mod settings;
mod value;

// ============================================================================
// Dynamic values
// ============================================================================

pub use nested::Nested;
pub use value::{FloatKey, Key, Mapping, Value};

// ============================================================================
// Operation options and errors
// ============================================================================

pub use error::OpError;
pub use policy::{MergeDepth, OrderPolicy, SpacePolicy};
pub use settings::{DEFAULT_TRUNCATE_SUFFIX, OpsDefaults};

/// Result of a single operation call.
pub type OpResult<T> = Result<T, OpError>;
