//! # postman-cli
//!
//! Fetches a server's OpenAPI document and writes it out as a Postman
//! Collection v2.1 file.

mod config;
mod error;
mod pipeline;
mod report;

pub use config::{Args, Config, DEFAULT_OUTPUT, DEFAULT_URL};
pub use error::{CliError, CliResult};
pub use pipeline::{run, RunSummary};
pub use report::write_failure;
