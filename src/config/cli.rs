use crate::domain::ports::Output;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn emit(&mut self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }
}
