//! Command implementations.

pub mod config;
pub mod probe;
pub mod run;
