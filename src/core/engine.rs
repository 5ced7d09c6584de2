use crate::core::{factorial, greeter, ConfigProvider, FactorialResult, GreetReport, Output};
use crate::utils::error::Result;

pub struct GreetEngine<O: Output, C: ConfigProvider> {
    output: O,
    config: C,
}

impl<O: Output, C: ConfigProvider> GreetEngine<O, C> {
    pub fn new(output: O, config: C) -> Self {
        Self { output, config }
    }

    pub fn run(&mut self) -> Result<GreetReport> {
        // 問候永遠先輸出，階乘失敗也不影響
        tracing::debug!("Greeting {}", self.config.name());
        let greeting = greeter::greet(self.config.name());
        self.output.emit(&greeting)?;

        let mut factorial_result = None;
        if let Some(n) = self.config.factorial_input() {
            tracing::debug!("Computing factorial of {}", n);
            let value = factorial::factorial(n)?;
            self.output.emit(&value.to_string())?;
            factorial_result = Some(FactorialResult { input: n, value });
        }

        Ok(GreetReport {
            greeting,
            factorial: factorial_result,
        })
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
