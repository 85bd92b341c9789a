//! SysAid scheduler: one maker + one checker per Mon..Sat week
//! overlapping `[start, end]`, built on the same week-bucketing helpers
//! used elsewhere in the engine.

use chrono::{Duration, NaiveDate};
use shared::TaskKind;
use std::collections::HashSet;
use uuid::Uuid;

use super::availability::AvailabilityStore;
use super::config::SchedulingConfig;
use super::eligibility::{filter_candidates, sysaid_constraints, EligibilityContext, RestCooldownMap};
use super::ledger::FairnessLedger;
use super::selector::{select, CandidateRank};
use super::time::week_starts_in_range;
use crate::domain::entities::Assignment;

pub struct SysaidAuditRecord {
    pub week_start: NaiveDate,
    pub kind: TaskKind,
    pub chosen_member_id: Option<Uuid>,
    pub candidates: Vec<CandidateRank>,
    pub tie_break_reason: String,
    pub warnings: Vec<String>,
}

pub struct SysaidPhaseOutcome {
    pub assignments: Vec<Assignment>,
    pub audit_records: Vec<SysaidAuditRecord>,
}

/// Selects one maker and one checker per Mon..Sat week overlapping
/// `[start, end]`, emitting one assignment per assigned day for each role
/// while incrementing the ledger only once per week.
#[allow(clippy::too_many_arguments)]
pub fn run(
    start: NaiveDate,
    end: NaiveDate,
    availability: &AvailabilityStore,
    rest_map: &RestCooldownMap,
    ledger: &mut FairnessLedger,
    config: &SchedulingConfig,
    schedule_id: Uuid,
    seed: u64,
    aggressiveness: u8,
) -> SysaidPhaseOutcome {
    let mut assignments = Vec::new();
    let mut audit_records = Vec::new();
    let constraints = sysaid_constraints();
    let pool: Vec<_> = availability.active_members().cloned().collect();

    for week_start in week_starts_in_range(start, end) {
        let week_end = week_start + Duration::days(5);
        let assigned_days: Vec<NaiveDate> = (0..=5)
            .map(|offset| week_start + Duration::days(offset))
            .filter(|d| *d >= start && *d <= end)
            .collect();
        if assigned_days.is_empty() {
            continue;
        }

        let key_iso = week_start.format("%Y-%m-%d").to_string();

        let maker_ctx = EligibilityContext {
            config,
            availability,
            rest_map,
            kind: TaskKind::SysaidMaker,
            date: week_start,
            week_end: Some(week_end),
            already_assigned_today: &HashSet::new(),
            maker: None,
        };
        let (maker_eligible, maker_excluded) = filter_candidates(&pool, &constraints, &maker_ctx);
        let maker_warning = (maker_eligible.len() < 2).then(|| {
            format!(
                "week {}: only {} eligible member(s) for maker/checker ({} excluded)",
                week_start,
                maker_eligible.len(),
                maker_excluded.len()
            )
        });

        // §7 DistinctnessViolation: fewer than 2 eligible members for the
        // week skips both roles, not just the checker. `select` still runs
        // so the audit trail records how the lone (or zero) candidate(s)
        // ranked, but its `chosen` is discarded.
        let maker_select = select(
            &maker_eligible,
            ledger,
            TaskKind::SysaidMaker,
            &key_iso,
            seed,
            aggressiveness,
        );
        let maker_result = if maker_eligible.len() >= 2 {
            maker_select
        } else {
            super::selector::SelectionResult {
                chosen: None,
                candidates: maker_select.candidates,
                reason: "skipped: fewer than 2 eligible members for maker/checker".to_string(),
            }
        };

        let mut maker_warnings = Vec::new();
        if let Some(w) = &maker_warning {
            maker_warnings.push(w.clone());
        }

        if let Some(maker_id) = maker_result.chosen {
            ledger.increment(maker_id, TaskKind::SysaidMaker);
            for day in &assigned_days {
                assignments.push(Assignment {
                    id: Uuid::new_v4(),
                    schedule_id,
                    date: *day,
                    kind: TaskKind::SysaidMaker,
                    shift_label: "Week".to_string(),
                    member_id: maker_id,
                    status: shared::AssignmentStatus::Active,
                    created_at: chrono::Utc::now(),
                });
            }
        }

        audit_records.push(SysaidAuditRecord {
            week_start,
            kind: TaskKind::SysaidMaker,
            chosen_member_id: maker_result.chosen,
            candidates: maker_result.candidates,
            tie_break_reason: maker_result.reason,
            warnings: maker_warnings,
        });

        let checker_ctx = EligibilityContext {
            config,
            availability,
            rest_map,
            kind: TaskKind::SysaidChecker,
            date: week_start,
            week_end: Some(week_end),
            already_assigned_today: &HashSet::new(),
            maker: maker_result.chosen,
        };
        let (checker_eligible, checker_excluded) =
            filter_candidates(&pool, &constraints, &checker_ctx);
        let checker_warning = maker_result.chosen.is_none().then(|| {
            "no maker chosen: checker selection skipped for the week".to_string()
        }).or_else(|| {
            (checker_eligible.is_empty()).then(|| {
                format!(
                    "week {}: no eligible member for checker distinct from maker ({} excluded)",
                    week_start,
                    checker_excluded.len()
                )
            })
        });

        let checker_result = if maker_result.chosen.is_some() {
            select(
                &checker_eligible,
                ledger,
                TaskKind::SysaidChecker,
                &key_iso,
                seed,
                aggressiveness,
            )
        } else {
            super::selector::SelectionResult {
                chosen: None,
                candidates: Vec::new(),
                reason: "skipped: no maker chosen".to_string(),
            }
        };

        let mut checker_warnings = Vec::new();
        if let Some(w) = &checker_warning {
            checker_warnings.push(w.clone());
        }

        if let Some(checker_id) = checker_result.chosen {
            ledger.increment(checker_id, TaskKind::SysaidChecker);
            for day in &assigned_days {
                assignments.push(Assignment {
                    id: Uuid::new_v4(),
                    schedule_id,
                    date: *day,
                    kind: TaskKind::SysaidChecker,
                    shift_label: "Week".to_string(),
                    member_id: checker_id,
                    status: shared::AssignmentStatus::Active,
                    created_at: chrono::Utc::now(),
                });
            }
        }

        audit_records.push(SysaidAuditRecord {
            week_start,
            kind: TaskKind::SysaidChecker,
            chosen_member_id: checker_result.chosen,
            candidates: checker_result.candidates,
            tie_break_reason: checker_result.reason,
            warnings: checker_warnings,
        });
    }

    SysaidPhaseOutcome {
        assignments,
        audit_records,
    }
}
