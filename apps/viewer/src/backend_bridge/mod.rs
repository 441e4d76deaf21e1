//! Backend worker: owns the async runtime that performs the single data load.

pub mod commands;
pub mod runtime;
