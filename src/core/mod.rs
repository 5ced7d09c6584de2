pub mod engine;
pub mod factorial;
pub mod greeter;

pub use crate::domain::model::{FactorialResult, GreetReport};
pub use crate::domain::ports::{ConfigProvider, Output};
pub use crate::utils::error::Result;
