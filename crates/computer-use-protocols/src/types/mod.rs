//! Common types used across the workspace.

mod common;

pub use common::*;
