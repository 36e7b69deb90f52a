//! Orchestration services for the generation pipeline.

mod daily_limit;
mod generation;
mod persistence;

pub use daily_limit::{CAN_GENERATE_MESSAGE, DailyLimitService, LIMIT_REACHED_MESSAGE};
pub use generation::{ScheduleError, ScheduleGenerationService, ScheduleResult};
pub use persistence::SchedulePersistenceService;
