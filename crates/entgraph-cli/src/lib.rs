//! entgraph command-line front end.
//!
//! Configuration loading and the interactive loop live here so they can be
//! tested without a terminal. `main.rs` only wires them to stdio.

pub mod config;
pub mod repl;

pub use config::{Config, ConfigError};
pub use repl::{run_repl, write_banner};
