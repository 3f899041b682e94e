//! User interfaces
//!
//! - `cli`: One-shot commands for scripts and quick checks
//! - `tui`: Interactive terminal interface (feature "tui")

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
