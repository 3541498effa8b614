//! bubblesplit CLI library
//!
//! This library provides the command-line harness around
//! `bubblesplit-core`: reading inputs, splitting them into bubbles and
//! writing the result as text, JSON delivery records or markdown.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
