//! sixdeg-core: Shared types and error handling for the sixdeg workspace.
//!
//! This crate provides the foundational types used by the search engine:
//! - Node identifiers and attribute-carrying node records
//! - The JSON graph document consumed at the request boundary
//! - Common error types

pub mod error;
pub mod types;

pub use error::SixdegError;
pub use types::{Attributes, GraphDocument, Node, NodeId, ROLE_ATTRIBUTE};
