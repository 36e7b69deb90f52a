//! In-memory adapters for tests and local use.

mod generator;
mod preferences;

pub use generator::FixedPlanGenerator;
pub use preferences::InMemoryPreferenceStore;
