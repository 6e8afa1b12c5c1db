//! Command-line interface module.

mod apply;
mod args;
mod common;
mod rules;

pub use apply::run_apply;
pub use args::{ApplyArgs, Cli, Commands, OutputArgs};
pub use rules::run_rules;
