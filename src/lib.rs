pub mod aggregate;
pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod report;
pub mod util;

#[cfg(test)]
mod test_helpers;
