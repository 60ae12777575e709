pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod completions;
pub mod error;
pub mod extract;
pub mod manifest;
pub mod model;
pub mod output;
pub mod report;
pub mod segment;
pub mod skip;
pub mod walker;

pub use aggregate::{Aggregator, SpecFailure, Totals};
pub use cli::{Cli, Command, CompletionsArgs, ScanArgs};
pub use error::{Error, ExitCode, Result};
pub use model::{Repository, Spec, SpecSource, SpecType, TestRecord};
