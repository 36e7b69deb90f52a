//! Aggregate candidate validation.

use crate::goal::domain::UserId;
use crate::task::domain::TaskCandidate;
use crate::task::validation::{
    report::{CandidateRuleError, ValidationReport},
    rules,
};

/// Validates a typed candidate against every field rule, accumulating all
/// violations in rule order rather than stopping at the first failure.
///
/// Typed candidates already guarantee integral goal references and
/// recognized slot values, so those rules are vacuously satisfied here;
/// they remain reachable through [`rules`] for untyped input paths.
#[must_use]
pub fn validate_candidate(candidate: &TaskCandidate, owner: Option<UserId>) -> ValidationReport {
    let mut errors = Vec::new();

    collect(&mut errors, rules::validate_title(candidate.title()));
    collect(&mut errors, rules::validate_owner(owner));
    collect(
        &mut errors,
        rules::validate_duration(candidate.duration_minutes().map(i64::from)),
    );
    collect(
        &mut errors,
        rules::validate_slot_alignment(candidate.time_slot(), candidate.specific_time().as_ref()),
    );

    ValidationReport::new(errors)
}

fn collect(errors: &mut Vec<CandidateRuleError>, outcome: Result<(), CandidateRuleError>) {
    if let Err(error) = outcome {
        errors.push(error);
    }
}
