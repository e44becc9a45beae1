//! Types and errors shared across the crate

pub mod errors;
pub mod types;
