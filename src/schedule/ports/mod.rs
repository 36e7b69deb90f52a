//! Port contracts for the generation pipeline.

pub mod generator;
pub mod preferences;

pub use generator::{GeneratorError, GeneratorResult, ScheduleGenerator};
pub use preferences::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult};
