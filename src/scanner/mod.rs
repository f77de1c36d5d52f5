//! Zone.Identifier scanner: bottom-up walker, name matcher, deletion, and the sweep driver.

pub mod deletion;
pub mod matcher;
pub mod sweep;
pub mod walker;
