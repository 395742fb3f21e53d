/// Config inspection command.
pub mod config;
/// Batch split-and-rotate command.
pub mod run;
