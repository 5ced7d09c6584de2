pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{cli::ConsoleOutput, CliConfig};

pub use crate::core::engine::GreetEngine;
pub use domain::model::{FactorialResult, GreetReport};
pub use utils::error::{GreetError, Result};
