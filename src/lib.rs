//! shortlink-console - Terminal client for a URL shortener REST API
//!
//! Everything visible here is presentation and API-binding: the backend owns
//! the short codes, the click counters, and the redirects. This crate wraps
//! its REST surface in a typed client and puts two faces on it.
//!
//! # Features
//! - **tui**: Interactive terminal interface (default)
//!
//! # Architecture
//! - `api`: Typed reqwest client for the backend REST surface
//! - `my_links`: Advisory, file-backed record of codes created locally
//! - `insights`: Pure derived metrics (age, daily average, activity)
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Layered configuration (defaults, TOML, environment)

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod insights;
pub mod interfaces;
pub mod my_links;
pub mod utils;
