use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("Factorial is not defined for negative numbers (got {value})")]
    NegativeFactorial { value: i64 },

    #[error("Factorial of {value} does not fit in 128 bits (largest supported input is {max})")]
    FactorialOverflow { value: i64, max: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Computation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GreetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreetError::NegativeFactorial { .. } | GreetError::FactorialOverflow { .. } => {
                ErrorCategory::Computation
            }
            GreetError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GreetError::NegativeFactorial { .. } | GreetError::FactorialOverflow { .. } => {
                ErrorSeverity::High
            }
            GreetError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GreetError::NegativeFactorial { .. } => {
                "Pass a non-negative integer to --factorial".to_string()
            }
            GreetError::FactorialOverflow { max, .. } => {
                format!("Pass a value between 0 and {} to --factorial", max)
            }
            GreetError::IoError(_) => "Check that the output stream is writable".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::NegativeFactorial { value } => {
                format!("Cannot compute factorial of {}: negative numbers have no factorial", value)
            }
            GreetError::FactorialOverflow { value, max } => {
                format!("Cannot compute factorial of {}: the largest supported input is {}", value, max)
            }
            GreetError::IoError(e) => format!("Failed to write output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
