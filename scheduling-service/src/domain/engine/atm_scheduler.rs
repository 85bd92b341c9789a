//! ATM shift scheduling. Walks `[start, end]` day by day, filling the
//! canonical day shift plan via the eligibility filter and selector, and
//! maintains the rest/cooldown map the SysAid phase consumes afterward.
//! An unfillable slot becomes a warning, never an error.

use chrono::{Duration, NaiveDate, Weekday};
use shared::TaskKind;
use std::collections::HashSet;
use uuid::Uuid;

use super::availability::AvailabilityStore;
use super::config::SchedulingConfig;
use super::eligibility::{atm_constraints, filter_candidates, EligibilityContext, RestCooldownMap};
use super::ledger::FairnessLedger;
use super::selector::{select, CandidateRank};
use crate::domain::entities::Assignment;

/// One labeled slot in a day's plan; `required_count` is always 1 in the
/// canonical table (no shift has more than one seat).
#[derive(Debug, Clone, Copy)]
pub struct ShiftSlot {
    pub label: &'static str,
    pub kind: TaskKind,
    pub required_count: usize,
}

const fn slot(label: &'static str, kind: TaskKind) -> ShiftSlot {
    ShiftSlot {
        label,
        kind,
        required_count: 1,
    }
}

/// The canonical day shift plan: weekdays get 2 shifts, Saturday 4, Sunday 3.
pub fn day_shift_plan(weekday: Weekday) -> &'static [ShiftSlot] {
    const WEEKDAY: [ShiftSlot; 2] = [
        slot("Morning", TaskKind::AtmMorning),
        slot("Mid/Night", TaskKind::AtmMidnight),
    ];
    const SATURDAY: [ShiftSlot; 4] = [
        slot("Morning", TaskKind::AtmMorning),
        slot("Mid/Night-1", TaskKind::AtmMidnight),
        slot("Mid/Night-2", TaskKind::AtmMidnight),
        slot("Mid/Night-3", TaskKind::AtmMidnight),
    ];
    const SUNDAY: [ShiftSlot; 3] = [
        slot("Morning-1", TaskKind::AtmMorning),
        slot("Morning-2", TaskKind::AtmMorning),
        slot("Night", TaskKind::AtmMidnight),
    ];

    match weekday {
        Weekday::Sat => &SATURDAY,
        Weekday::Sun => &SUNDAY,
        _ => &WEEKDAY,
    }
}

/// One selection decision, destined for an [`crate::domain::entities::AuditEntry`].
pub struct AtmAuditRecord {
    pub date: NaiveDate,
    pub kind: TaskKind,
    pub shift_label: String,
    pub chosen_member_id: Option<Uuid>,
    pub candidates: Vec<CandidateRank>,
    pub tie_break_reason: String,
    pub warnings: Vec<String>,
}

pub struct AtmPhaseOutcome {
    pub assignments: Vec<Assignment>,
    pub audit_records: Vec<AtmAuditRecord>,
    pub rest_map: RestCooldownMap,
}

/// Drives the ATM phase front-to-back over `[start, end]`, mutating
/// `ledger` in place and returning the rest/cooldown map for the SysAid
/// phase.
#[allow(clippy::too_many_arguments)]
pub fn run(
    start: NaiveDate,
    end: NaiveDate,
    availability: &AvailabilityStore,
    ledger: &mut FairnessLedger,
    config: &SchedulingConfig,
    schedule_id: Uuid,
    seed: u64,
    aggressiveness: u8,
) -> AtmPhaseOutcome {
    let mut rest_map = RestCooldownMap::new();
    let mut assignments = Vec::new();
    let mut audit_records = Vec::new();
    let constraints = atm_constraints();

    let mut cursor = start;
    while cursor <= end {
        let plan = day_shift_plan(super::time::weekday(cursor));
        let mut already_assigned_today: HashSet<Uuid> = HashSet::new();

        for shift in plan {
            let pool: Vec<_> = availability.active_members().cloned().collect();
            let ctx = EligibilityContext {
                config,
                availability,
                rest_map: &rest_map,
                kind: shift.kind,
                date: cursor,
                week_end: None,
                already_assigned_today: &already_assigned_today,
                maker: None,
            };
            let (eligible, excluded) = filter_candidates(&pool, &constraints, &ctx);

            let mut warnings = Vec::new();
            if eligible.len() < shift.required_count {
                warnings.push(format!(
                    "insufficient candidates for {} on {}: {} eligible of {} required ({} excluded)",
                    shift.label,
                    cursor,
                    eligible.len(),
                    shift.required_count,
                    excluded.len()
                ));
            }

            let key_iso = cursor.format("%Y-%m-%d").to_string();
            let result = select(&eligible, ledger, shift.kind, &key_iso, seed, aggressiveness);

            if let Some(member_id) = result.chosen {
                already_assigned_today.insert(member_id);
                ledger.increment(member_id, shift.kind);
                assignments.push(Assignment {
                    id: Uuid::new_v4(),
                    schedule_id,
                    date: cursor,
                    kind: shift.kind,
                    shift_label: shift.label.to_string(),
                    member_id,
                    status: shared::AssignmentStatus::Active,
                    created_at: chrono::Utc::now(),
                });

                if shift.kind == TaskKind::AtmMidnight {
                    if config.atm_rest_rule_enabled {
                        rest_map.set_rest_day(member_id, cursor + Duration::days(1));
                    }
                    rest_map.record_midnight(member_id, cursor);
                }
            }

            audit_records.push(AtmAuditRecord {
                date: cursor,
                kind: shift.kind,
                shift_label: shift.label.to_string(),
                chosen_member_id: result.chosen,
                candidates: result.candidates,
                tie_break_reason: result.reason,
                warnings,
            });
        }

        cursor += Duration::days(1);
    }

    AtmPhaseOutcome {
        assignments,
        audit_records,
        rest_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_plan_has_two_shifts() {
        assert_eq!(day_shift_plan(Weekday::Wed).len(), 2);
    }

    #[test]
    fn saturday_plan_has_four_shifts() {
        assert_eq!(day_shift_plan(Weekday::Sat).len(), 4);
    }

    #[test]
    fn sunday_plan_has_three_shifts() {
        assert_eq!(day_shift_plan(Weekday::Sun).len(), 3);
    }

    #[test]
    fn sunday_has_two_morning_slots_and_one_night() {
        let plan = day_shift_plan(Weekday::Sun);
        let morning_count = plan.iter().filter(|s| s.kind == TaskKind::AtmMorning).count();
        let night_count = plan.iter().filter(|s| s.kind == TaskKind::AtmMidnight).count();
        assert_eq!(morning_count, 2);
        assert_eq!(night_count, 1);
    }
}
