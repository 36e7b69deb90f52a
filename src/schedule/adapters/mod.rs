//! Adapter implementations of generation-pipeline ports.

pub mod memory;
pub mod postgres;
