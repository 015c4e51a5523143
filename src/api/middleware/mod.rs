//! HTTP middleware wrapped around the route table.
//!
//! Provides failure normalization, declared media type enforcement, and
//! request tracing.

pub mod content_type;
pub mod error_normalizer;
pub mod tracing;
