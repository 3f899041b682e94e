//! CLI command implementations

pub mod health;
pub mod list;
pub mod mine;
pub mod remove;
pub mod shorten;
pub mod stats;
