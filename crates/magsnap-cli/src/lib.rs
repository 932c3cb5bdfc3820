#![forbid(unsafe_code)]

//! Command-line front end for the magsnap alignment engine.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod scene;

pub use cli::{Cli, Commands, run};
pub use error::{CliError, Result};
pub use logging::LogFormat;
pub use scene::Scene;
