//! API Client
//!
//! Browser access to the portfolio backend.

pub mod client;

pub use client::{content_source, get_api_base, set_api_base};
