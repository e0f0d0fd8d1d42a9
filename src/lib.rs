//! adacheck - ADA/WCAG compliance checker client
//!
//! Sends pages to a compliance analysis service, renders its answers into an
//! HTML results page and terminal summaries, and exports standalone reports for
//! the most recent full analysis.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod model;
pub mod progress;
pub mod render;
pub mod report;
pub mod store;

pub use error::{Error, Result};
