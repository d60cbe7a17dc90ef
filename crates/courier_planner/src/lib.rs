pub mod error;
pub mod json;
pub mod problem;
pub mod report;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_utils;
