//! Activity events and their console rendering.

pub mod console;
pub mod events;
