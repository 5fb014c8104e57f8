pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_selector {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_selector(result, &$name, stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_selector(predicate: bool, selector: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_selector(selector, condition)
    }
}

#[cold]
pub fn invalid_selector(selector: &str, condition: &str) -> Result<()> {
    Err(crate::error::Error::invalid_selector(selector, condition))
}
