pub mod category;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod results;
pub mod runner;
pub mod scanner;
pub mod smoke;

pub use error::{PuppetCheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 1;
pub const EXIT_CHECK_FAILED: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
