use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorialResult {
    pub input: i64,
    pub value: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetReport {
    pub greeting: String,
    pub factorial: Option<FactorialResult>,
}
