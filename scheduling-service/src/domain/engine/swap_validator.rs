//! Swap/reassign validation. Re-runs the eligibility filter for the
//! target assignment's kind, excluding the assignment's own prior member
//! from the collision checks, and returns a structured
//! `DomainError::ConstraintViolation` naming the failing constraint
//! rather than a generic failure.

use shared::{AssignmentStatus, DomainError, DomainResult};
use std::collections::HashSet;
use uuid::Uuid;

use super::availability::{AvailabilityStore, ResolvedMember};
use super::config::SchedulingConfig;
use super::eligibility::{atm_constraints, sysaid_constraints, EligibilityContext, RestCooldownMap};
use super::ledger::FairnessLedger;
use super::time::week_bucket;
use crate::domain::entities::Assignment;

/// Checks every hard constraint of `assignment.kind` against `candidate`,
/// as if `assignment`'s own prior member were not in the running.
/// Returns `Ok(())` when the swap would be valid.
pub fn validate(
    candidate: &ResolvedMember,
    assignment: &Assignment,
    availability: &AvailabilityStore,
    rest_map: &RestCooldownMap,
    config: &SchedulingConfig,
    other_same_day_members: &HashSet<Uuid>,
    maker_id: Option<Uuid>,
) -> DomainResult<()> {
    let (constraints, week_end) = if assignment.kind.is_weekly() {
        let (_, week_end) = week_bucket(assignment.date);
        (sysaid_constraints(), Some(week_end))
    } else {
        (atm_constraints(), None)
    };

    let ctx = EligibilityContext {
        config,
        availability,
        rest_map,
        kind: assignment.kind,
        date: assignment.date,
        week_end,
        already_assigned_today: other_same_day_members,
        maker: maker_id,
    };

    for constraint in &constraints {
        if let Some(reason) = constraint.excludes(candidate, &ctx) {
            return Err(DomainError::ConstraintViolation {
                constraint: constraint.name().to_string(),
                detail: format!(
                    "{} is not eligible for {:?} on {}: {}",
                    candidate.id, assignment.kind, assignment.date, reason
                ),
            });
        }
    }

    Ok(())
}

/// Applies an already-validated swap: supersedes the original
/// assignment, adjusts the ledger, and returns the replacement assignment
/// row. Callers persist both rows in one transaction; this function
/// performs no I/O.
pub fn apply(ledger: &mut FairnessLedger, original: &mut Assignment, new_member_id: Uuid) -> Assignment {
    let previous_member = original.member_id;
    original.status = AssignmentStatus::Superseded;

    ledger.decrement(previous_member, original.kind);
    ledger.increment(new_member_id, original.kind);

    Assignment {
        id: Uuid::new_v4(),
        schedule_id: original.schedule_id,
        date: original.date,
        kind: original.kind,
        shift_label: original.shift_label.clone(),
        member_id: new_member_id,
        status: AssignmentStatus::Active,
        created_at: chrono::Utc::now(),
    }
}
