pub mod cli;

use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-greet")]
#[command(about = "A small CLI that greets a person and computes factorials")]
pub struct CliConfig {
    /// Name of the person to greet
    #[arg(long)]
    pub name: String,

    /// Calculate factorial of this number
    #[arg(long, allow_negative_numbers = true)]
    pub factorial: Option<i64>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn factorial_input(&self) -> Option<i64> {
        self.factorial
    }
}
