//! Fairness ledger. The single source of fairness truth during a
//! generation: seeded from persisted history, mutated in-memory through
//! the run, and written back as deltas on commit.

use chrono::NaiveDate;
use shared::TaskKind;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::entities::Assignment;

#[derive(Debug, Clone)]
pub struct FairnessLedger {
    counts: HashMap<(Uuid, TaskKind), i64>,
    window_start: NaiveDate,
    window_end: NaiveDate,
}

impl FairnessLedger {
    pub fn new(window_start: NaiveDate, window_end: NaiveDate) -> Self {
        Self {
            counts: HashMap::new(),
            window_start,
            window_end,
        }
    }

    pub fn window(&self) -> (NaiveDate, NaiveDate) {
        (self.window_start, self.window_end)
    }

    pub fn count(&self, member_id: Uuid, kind: TaskKind) -> i64 {
        self.counts.get(&(member_id, kind)).copied().unwrap_or(0)
    }

    pub fn total(&self, member_id: Uuid) -> i64 {
        TASK_KINDS.iter().map(|k| self.count(member_id, *k)).sum()
    }

    pub fn increment(&mut self, member_id: Uuid, kind: TaskKind) {
        *self.counts.entry((member_id, kind)).or_insert(0) += 1;
    }

    pub fn decrement(&mut self, member_id: Uuid, kind: TaskKind) {
        let entry = self.counts.entry((member_id, kind)).or_insert(0);
        *entry = (*entry - 1).max(0);
    }

    /// Seeds one cell directly, for callers (e.g. the swap handler) that
    /// already hold a persisted [`crate::domain::entities::FairnessCount`]
    /// row rather than raw assignment history.
    pub fn set_count(&mut self, member_id: Uuid, kind: TaskKind, count: i64) {
        self.counts.insert((member_id, kind), count);
    }

    /// Rebuild counts from assignment history within `(window_end -
    /// window_days, window_end]`. Weekly roles (SysAid maker/checker)
    /// count once per week, not once per assigned day: a run of
    /// consecutive same-week same-member same-kind assignments collapses
    /// to a single increment, keyed by the week's Monday.
    pub fn recompute_from_history(
        assignments: &[Assignment],
        as_of: NaiveDate,
        window_days: i64,
    ) -> Self {
        let window_start = as_of - chrono::Duration::days(window_days);
        let window_end = as_of;
        let mut ledger = Self::new(window_start, window_end);

        let mut weekly_seen: std::collections::HashSet<(Uuid, TaskKind, NaiveDate)> =
            std::collections::HashSet::new();

        for assignment in assignments {
            if !assignment.is_active() {
                continue;
            }
            if !(assignment.date > window_start && assignment.date <= window_end) {
                continue;
            }

            if assignment.kind.is_weekly() {
                let (week_start, _) = super::time::week_bucket(assignment.date);
                let key = (assignment.member_id, assignment.kind, week_start);
                if weekly_seen.insert(key) {
                    ledger.increment(assignment.member_id, assignment.kind);
                }
            } else {
                ledger.increment(assignment.member_id, assignment.kind);
            }
        }

        ledger
    }
}

const TASK_KINDS: [TaskKind; 4] = [
    TaskKind::AtmMorning,
    TaskKind::AtmMidnight,
    TaskKind::SysaidMaker,
    TaskKind::SysaidChecker,
];
