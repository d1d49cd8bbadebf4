//! Fundamentals Core - report builders (pure logic, no terminal IO)
//!
//! Contains the environment reporter and the variable/type demonstrator.
//! Reports are built in memory and rendered into any `std::io::Write`;
//! the caller decides where the bytes go.

pub mod demo;
pub mod env_report;
pub mod error;
pub mod type_info;

// Re-export common types
pub use demo::{Line, Observation, Report, Section};
pub use env_report::EnvReport;
pub use error::{Error, Result};
