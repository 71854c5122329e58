//! HTTP plumbing shared by the endpoint modules: state, extractors, health.

pub mod extract;
pub mod http;

pub use http::*;
