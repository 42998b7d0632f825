//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization and tracing
//! - Categorization of transport errors into trace error kinds

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, TraceError, TraceErrorKind};
