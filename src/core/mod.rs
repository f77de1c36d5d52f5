//! Core types: errors, run configuration, path resolution.

pub mod config;
pub mod errors;
pub mod paths;
