//! Core types and configuration for the osskit serde layer.
//!
//! This crate holds the pieces every other osskit crate agrees on: the error
//! taxonomy raised while building requests and reading responses, the
//! env-driven [`SerdeConfig`], and well-known OSS header names.

mod config;
mod error;
pub mod headers;

pub use config::SerdeConfig;
pub use error::{SerdeError, SerdeResult};
