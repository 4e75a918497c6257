//! VET Core Types
//!
//! This crate provides the foundational types used throughout the VET system:
//! - Value types (the Value enum with the scalar, list and record shapes)
//! - Semantic field kinds (FieldKind)
//! - Common error types for configuration failures

mod error;
mod kind;
mod value;

pub use error::*;
pub use kind::*;
pub use value::*;
