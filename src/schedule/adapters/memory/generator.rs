//! Generation backend double returning a preconfigured plan.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::goal::domain::Goal;
use crate::schedule::{
    domain::{GeneratedPlan, UserPreferences},
    ports::{GeneratorError, GeneratorResult, ScheduleGenerator},
};

/// Generation backend that returns a fixed, settable plan.
///
/// Useful for behaviour tests and local development without a live
/// text-generation service. The default plan is empty.
#[derive(Debug, Clone, Default)]
pub struct FixedPlanGenerator {
    plan: Arc<RwLock<GeneratedPlan>>,
}

impl FixedPlanGenerator {
    /// Creates a generator returning an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator returning the given plan.
    #[must_use]
    pub fn with_plan(plan: GeneratedPlan) -> Self {
        Self {
            plan: Arc::new(RwLock::new(plan)),
        }
    }

    /// Replaces the plan returned by subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Backend`] when the internal lock is
    /// poisoned.
    pub fn set_plan(&self, plan: GeneratedPlan) -> GeneratorResult<()> {
        let mut guard = self
            .plan
            .write()
            .map_err(|err| GeneratorError::backend(std::io::Error::other(err.to_string())))?;
        *guard = plan;
        Ok(())
    }
}

#[async_trait]
impl ScheduleGenerator for FixedPlanGenerator {
    async fn generate(
        &self,
        _goals: &[Goal],
        _preferences: &UserPreferences,
    ) -> GeneratorResult<GeneratedPlan> {
        let guard = self
            .plan
            .read()
            .map_err(|err| GeneratorError::backend(std::io::Error::other(err.to_string())))?;
        Ok(guard.clone())
    }
}
