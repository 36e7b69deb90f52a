//! Adapter implementations of goal ports.

pub mod memory;
pub mod postgres;
