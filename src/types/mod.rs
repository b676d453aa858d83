//! Common types used across the Fireblocks client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
