//! Schedule assembler: the single entry point the async job runner
//! drives. Acquires a snapshot, seeds the ledger, runs ATM then SysAid,
//! and hands back everything that needs to be persisted together as one
//! logical transaction.

use chrono::NaiveDate;
use shared::{DomainError, DomainResult, TaskKind};

use super::atm_scheduler;
use super::audit;
use super::availability::{AvailabilityStore, ResolvedMember, UnavailabilityWindow};
use super::config::SchedulingConfig;
use super::ledger::FairnessLedger;
use super::sysaid_scheduler;
use crate::domain::entities::{Assignment, AuditEntry, FairnessCount};

pub struct GenerationRequest {
    pub schedule_id: uuid::Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub seed: u64,
    pub fairness_aggressiveness: u8,
    pub members: Vec<ResolvedMember>,
    pub unavailability: Vec<UnavailabilityWindow>,
    /// Persisted active assignments used to seed the fairness ledger;
    /// callers fetch these within `fairness_window_days` of `start_date`.
    pub history: Vec<Assignment>,
}

pub struct GenerationOutcome {
    pub assignments: Vec<Assignment>,
    pub audit_entries: Vec<AuditEntry>,
    pub fairness_counts: Vec<FairnessCount>,
    pub warnings: Vec<String>,
}

const ALL_TASK_KINDS: [TaskKind; 4] = [
    TaskKind::AtmMorning,
    TaskKind::AtmMidnight,
    TaskKind::SysaidMaker,
    TaskKind::SysaidChecker,
];

/// Runs one full generation, minus the actual I/O (persistence writes and
/// the snapshot fetch happen at the call site); this function is pure
/// given its inputs, which is what makes determinism checkable.
pub fn generate(request: GenerationRequest, config: &SchedulingConfig) -> DomainResult<GenerationOutcome> {
    if request.end_date < request.start_date {
        return Err(DomainError::InvalidInput(
            "end_date must not precede start_date".to_string(),
        ));
    }
    if !(1..=5).contains(&request.fairness_aggressiveness) {
        return Err(DomainError::InvalidInput(
            "fairness_aggressiveness must be within 1..=5".to_string(),
        ));
    }

    let availability = AvailabilityStore::new(request.members, request.unavailability);
    let mut ledger = FairnessLedger::recompute_from_history(
        &request.history,
        request.start_date,
        config.fairness_window_days,
    );

    let atm_outcome = atm_scheduler::run(
        request.start_date,
        request.end_date,
        &availability,
        &mut ledger,
        config,
        request.schedule_id,
        request.seed,
        request.fairness_aggressiveness,
    );

    let sysaid_outcome = sysaid_scheduler::run(
        request.start_date,
        request.end_date,
        &availability,
        &atm_outcome.rest_map,
        &mut ledger,
        config,
        request.schedule_id,
        request.seed,
        request.fairness_aggressiveness,
    );

    let mut assignments = atm_outcome.assignments;
    assignments.extend(sysaid_outcome.assignments);
    assignments.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut warnings = Vec::new();
    let mut audit_entries = Vec::with_capacity(atm_outcome.audit_records.len() + sysaid_outcome.audit_records.len());

    for record in atm_outcome.audit_records {
        warnings.extend(record.warnings.iter().cloned());
        audit_entries.push(audit::from_atm_record(request.schedule_id, record));
    }
    for record in sysaid_outcome.audit_records {
        warnings.extend(record.warnings.iter().cloned());
        audit_entries.push(audit::from_sysaid_record(request.schedule_id, record));
    }

    let (window_start, window_end) = ledger.window();
    let fairness_counts = availability
        .active_members()
        .flat_map(|member| {
            ALL_TASK_KINDS.iter().map(move |kind| FairnessCount {
                member_id: member.id,
                kind: *kind,
                count: ledger.count(member.id, *kind),
                window_start,
                window_end,
            })
        })
        .filter(|row| row.count > 0)
        .collect();

    Ok(GenerationOutcome {
        assignments,
        audit_entries,
        fairness_counts,
        warnings,
    })
}
