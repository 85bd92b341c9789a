//! Member & availability read view. A pure query view over a snapshot
//! fetched once at the start of a generation; it does not know about ATM
//! rest days (those live in [`super::atm_scheduler::RestCooldownMap`],
//! local to one generation).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{MemberRole, OfficeDays};
use std::collections::HashMap;
use uuid::Uuid;

/// A member as resolved by the data-service directory, the unit the
/// engine selects candidates from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedMember {
    pub id: Uuid,
    pub display_name: String,
    pub office_days: OfficeDays,
    pub role: MemberRole,
    pub active: bool,
}

/// One whole-day unavailability window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnavailabilityWindow {
    pub member_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl UnavailabilityWindow {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }
}

/// Read-only snapshot of members and their unavailability, fetched once
/// at the start of a generation.
pub struct AvailabilityStore {
    members: Vec<ResolvedMember>,
    unavailability: HashMap<Uuid, Vec<UnavailabilityWindow>>,
}

impl AvailabilityStore {
    pub fn new(members: Vec<ResolvedMember>, unavailability: Vec<UnavailabilityWindow>) -> Self {
        let mut by_member: HashMap<Uuid, Vec<UnavailabilityWindow>> = HashMap::new();
        for window in unavailability {
            by_member.entry(window.member_id).or_default().push(window);
        }
        Self {
            members,
            unavailability: by_member,
        }
    }

    pub fn active_members(&self) -> impl Iterator<Item = &ResolvedMember> {
        self.members.iter().filter(|m| m.active)
    }

    /// A member is unavailable on `date` iff it falls inside any of their
    /// unavailability windows.
    pub fn is_available(&self, member_id: Uuid, date: NaiveDate) -> bool {
        match self.unavailability.get(&member_id) {
            Some(windows) => !windows.iter().any(|w| w.covers(date)),
            None => true,
        }
    }

    pub fn is_available_all(&self, member_id: Uuid, start: NaiveDate, end: NaiveDate) -> bool {
        match self.unavailability.get(&member_id) {
            Some(windows) => !windows.iter().any(|w| w.overlaps(start, end)),
            None => true,
        }
    }
}
