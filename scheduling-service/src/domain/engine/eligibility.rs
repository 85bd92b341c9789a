//! Eligibility filtering: a small table of hard constraints, each able to
//! exclude a candidate from a pool while attaching a reason the audit log
//! can show.

use chrono::NaiveDate;
use shared::TaskKind;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::availability::{AvailabilityStore, ResolvedMember};
use super::config::SchedulingConfig;

/// Local-to-one-generation rest/cooldown state produced by the ATM phase
/// and consumed (read-only) by both phases' eligibility checks. Never
/// shared across generations.
#[derive(Debug, Default, Clone)]
pub struct RestCooldownMap {
    rest_days: HashSet<(Uuid, NaiveDate)>,
    last_midnight: HashMap<Uuid, NaiveDate>,
}

impl RestCooldownMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rest_day(&mut self, member_id: Uuid, date: NaiveDate) {
        self.rest_days.insert((member_id, date));
    }

    pub fn is_rest_day(&self, member_id: Uuid, date: NaiveDate) -> bool {
        self.rest_days.contains(&(member_id, date))
    }

    pub fn has_rest_day_in(&self, member_id: Uuid, start: NaiveDate, end: NaiveDate) -> bool {
        let mut cursor = start;
        while cursor <= end {
            if self.is_rest_day(member_id, cursor) {
                return true;
            }
            cursor += chrono::Duration::days(1);
        }
        false
    }

    pub fn record_midnight(&mut self, member_id: Uuid, date: NaiveDate) {
        self.last_midnight.insert(member_id, date);
    }

    pub fn last_midnight(&self, member_id: Uuid) -> Option<NaiveDate> {
        self.last_midnight.get(&member_id).copied()
    }

    /// Reconstructs rest/cooldown state from persisted assignment history
    /// rather than a live generation run, for the swap validator, which
    /// re-checks hard constraints outside of a generation.
    pub fn recompute_from_history(
        assignments: &[crate::domain::entities::Assignment],
        config: &SchedulingConfig,
    ) -> Self {
        let mut map = Self::new();
        for assignment in assignments {
            if !assignment.is_active() || assignment.kind != TaskKind::AtmMidnight {
                continue;
            }
            map.record_midnight(assignment.member_id, assignment.date);
            if config.atm_rest_rule_enabled {
                map.set_rest_day(assignment.member_id, assignment.date + chrono::Duration::days(1));
            }
        }
        map
    }
}

/// Everything a [`HardConstraint`] needs to decide whether to exclude a
/// candidate. ATM checks set `date`/`already_assigned_today`; SysAid
/// checks set `week_end`/`maker`.
pub struct EligibilityContext<'a> {
    pub config: &'a SchedulingConfig,
    pub availability: &'a AvailabilityStore,
    pub rest_map: &'a RestCooldownMap,
    pub kind: TaskKind,
    pub date: NaiveDate,
    pub week_end: Option<NaiveDate>,
    pub already_assigned_today: &'a HashSet<Uuid>,
    pub maker: Option<Uuid>,
}

impl<'a> EligibilityContext<'a> {
    fn week_range(&self) -> (NaiveDate, NaiveDate) {
        (self.date, self.week_end.unwrap_or(self.date))
    }
}

/// Excludes a candidate from a pool, naming the reason the audit log
/// shows for the exclusion.
pub trait HardConstraint: Send + Sync {
    fn name(&self) -> &'static str;
    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str>;
}

pub struct AvailabilityConstraint;
impl HardConstraint for AvailabilityConstraint {
    fn name(&self) -> &'static str {
        "availability"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        (!ctx.availability.is_available(candidate.id, ctx.date)).then_some("unavailable")
    }
}

pub struct RestDayConstraint;
impl HardConstraint for RestDayConstraint {
    fn name(&self) -> &'static str {
        "rest-rule"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        if !ctx.config.atm_rest_rule_enabled {
            return None;
        }
        ctx.rest_map
            .is_rest_day(candidate.id, ctx.date)
            .then_some("rest-day")
    }
}

pub struct CooldownConstraint;
impl HardConstraint for CooldownConstraint {
    fn name(&self) -> &'static str {
        "cooldown"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        if ctx.kind != TaskKind::AtmMidnight {
            return None;
        }
        match ctx.rest_map.last_midnight(candidate.id) {
            Some(last) => {
                let gap = (ctx.date - last).num_days();
                (gap < ctx.config.atm_b_cooldown_days).then_some("cooldown")
            }
            None => None,
        }
    }
}

pub struct SameDayDistinctnessConstraint;
impl HardConstraint for SameDayDistinctnessConstraint {
    fn name(&self) -> &'static str {
        "same-day-distinctness"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        ctx.already_assigned_today
            .contains(&candidate.id)
            .then_some("already-assigned-today")
    }
}

pub struct OfficeDaysConstraint;
impl HardConstraint for OfficeDaysConstraint {
    fn name(&self) -> &'static str {
        "office-day"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        (!candidate
            .office_days
            .is_superset_of(ctx.config.sysaid_required_office_days))
        .then_some("office-day")
    }
}

pub struct WeekAvailabilityConstraint;
impl HardConstraint for WeekAvailabilityConstraint {
    fn name(&self) -> &'static str {
        "unavailability"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        let (start, end) = ctx.week_range();
        (!ctx.availability.is_available_all(candidate.id, start, end)).then_some("unavailable")
    }
}

pub struct WeekRestConstraint;
impl HardConstraint for WeekRestConstraint {
    fn name(&self) -> &'static str {
        "rest-rule"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        let (start, end) = ctx.week_range();
        ctx.rest_map
            .has_rest_day_in(candidate.id, start, end)
            .then_some("rest-day-in-week")
    }
}

pub struct MakerDistinctnessConstraint;
impl HardConstraint for MakerDistinctnessConstraint {
    fn name(&self) -> &'static str {
        "weekly-distinctness"
    }

    fn excludes(&self, candidate: &ResolvedMember, ctx: &EligibilityContext) -> Option<&'static str> {
        (ctx.kind == TaskKind::SysaidChecker && ctx.maker == Some(candidate.id))
            .then_some("same-as-maker")
    }
}

/// Availability, rest, cooldown, and same-day distinctness for ATM.
pub fn atm_constraints() -> Vec<Box<dyn HardConstraint>> {
    vec![
        Box::new(AvailabilityConstraint),
        Box::new(RestDayConstraint),
        Box::new(CooldownConstraint),
        Box::new(SameDayDistinctnessConstraint),
    ]
}

/// Office presence, week-long availability, week rest, and maker/checker
/// distinctness for SysAid.
pub fn sysaid_constraints() -> Vec<Box<dyn HardConstraint>> {
    vec![
        Box::new(OfficeDaysConstraint),
        Box::new(WeekAvailabilityConstraint),
        Box::new(WeekRestConstraint),
        Box::new(MakerDistinctnessConstraint),
    ]
}

/// Splits a candidate pool into the eligible subset and the excluded
/// subset (with the first constraint name that rejected each).
pub fn filter_candidates(
    pool: &[ResolvedMember],
    constraints: &[Box<dyn HardConstraint>],
    ctx: &EligibilityContext,
) -> (Vec<ResolvedMember>, Vec<(Uuid, &'static str)>) {
    let mut eligible = Vec::new();
    let mut excluded = Vec::new();

    for candidate in pool {
        let mut rejection = None;
        for constraint in constraints {
            if let Some(reason) = constraint.excludes(candidate, ctx) {
                rejection = Some(reason);
                break;
            }
        }
        match rejection {
            Some(reason) => excluded.push((candidate.id, reason)),
            None => eligible.push(candidate.clone()),
        }
    }

    (eligible, excluded)
}
