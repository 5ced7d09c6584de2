use crate::utils::error::Result;

pub trait Output {
    fn emit(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn name(&self) -> &str;
    fn factorial_input(&self) -> Option<i64>;
}
