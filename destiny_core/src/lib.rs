#![forbid(unsafe_code)]

//! Core domain model and logic for the Destiny Predictor.
//!
//! This crate provides:
//! - Domain types (inputs, readings, prophecy tiers)
//! - Validated console prompting
//! - The destiny calculator and prophecy table
//! - Report rendering and the replay loop

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod calculator;
pub mod prophecy;
pub mod report;
pub mod session;


// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, ConfigSource};
pub use calculator::calculate;
pub use prompt::{collect_inputs, Bounds, Console};
pub use report::DestinyReport;
pub use session::{play, SessionLoop};
