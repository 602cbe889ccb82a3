//! Result models, one per operation.

mod bucket;
mod config;
mod object;
mod vector;

pub use bucket::*;
pub use config::*;
pub use object::*;
pub use vector::*;
