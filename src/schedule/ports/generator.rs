//! Port for the external text-generation backend.

use crate::goal::domain::Goal;
use crate::schedule::domain::{GeneratedPlan, UserPreferences};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for generation backend operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Text-generation backend contract.
///
/// Implementations are treated as untrusted: returned plans are never
/// persisted without passing through normalization and field validation.
/// Retry policy, if any, belongs to the implementation; the pipeline calls
/// `generate` exactly once per invocation.
#[async_trait]
pub trait ScheduleGenerator: Send + Sync {
    /// Produces a raw schedule proposal for the given goals and preferences.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Backend`] for transport or service
    /// failures and [`GeneratorError::MalformedResponse`] when the backend
    /// answer cannot be parsed into a plan.
    async fn generate(
        &self,
        goals: &[Goal],
        preferences: &UserPreferences,
    ) -> GeneratorResult<GeneratedPlan>;
}

/// Errors returned by generation backends.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    /// The backend call itself failed (transport, timeout, service error).
    #[error("generation backend failure: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend answered, but not with a parseable plan.
    #[error("malformed generator response: {0}")]
    MalformedResponse(String),
}

impl GeneratorError {
    /// Wraps a backend failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Describes an unparseable backend response.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }
}
