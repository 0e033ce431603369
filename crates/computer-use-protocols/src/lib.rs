//! # computer-use protocols
//!
//! Protocol definitions shared by the computer-use tool and its host binary.
//! Contains only interface definitions - no automation code.
//!
//! ## Core Traits
//!
//! - [`Tool`] - Trait for tool implementations

pub mod error;
pub mod tool;
pub mod types;

pub use error::ToolError;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::*;
