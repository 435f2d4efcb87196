//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (constants and validated [`SimConfig`])
//! - Error types
//! - Identifiers (PageId)

pub mod config;
pub mod error;
mod page_id;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use page_id::PageId;
