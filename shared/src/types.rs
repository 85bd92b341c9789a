use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Status of an async generation/background job (schedule generation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Lifecycle status of a generated schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "schedule_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Draft,
    Published,
    Archived,
}

/// The four canonical task kinds the core ever assigns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "task_kind", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    AtmMorning,
    AtmMidnight,
    SysaidMaker,
    SysaidChecker,
}

impl TaskKind {
    /// Whether this kind is incremented once per week (SysAid) or once
    /// per day (ATM) in the fairness ledger.
    pub fn is_weekly(self) -> bool {
        matches!(self, TaskKind::SysaidMaker | TaskKind::SysaidChecker)
    }

    pub fn is_atm(self) -> bool {
        matches!(self, TaskKind::AtmMorning | TaskKind::AtmMidnight)
    }

    /// Canonical ordering used for stable schedule iteration.
    pub fn canonical_rank(self) -> u8 {
        match self {
            TaskKind::AtmMorning => 0,
            TaskKind::AtmMidnight => 1,
            TaskKind::SysaidMaker => 2,
            TaskKind::SysaidChecker => 3,
        }
    }
}

/// Status of one assignment row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "assignment_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Active,
    Superseded,
}

/// Member role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Admin,
    Member,
}

/// Peer decision on a swap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "swap_peer_decision", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapPeerDecision {
    Pending,
    Accepted,
    Rejected,
}

/// Admin decision on a swap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "swap_admin_decision", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapAdminDecision {
    Pending,
    Approved,
    Rejected,
}

/// Bitflag set of weekdays, used for `Member::office_days` and config
/// values like `sysaid_week_days`/`sysaid_required_office_days`. Monday
/// is bit 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::Type)]
#[sqlx(transparent)]
pub struct OfficeDays(pub i16);

impl OfficeDays {
    pub const MON: Self = Self(1 << 0);
    pub const TUE: Self = Self(1 << 1);
    pub const WED: Self = Self(1 << 2);
    pub const THU: Self = Self(1 << 3);
    pub const FRI: Self = Self(1 << 4);
    pub const SAT: Self = Self(1 << 5);
    pub const SUN: Self = Self(1 << 6);

    pub const NONE: Self = Self(0);

    pub fn mon_to_fri() -> Self {
        Self(Self::MON.0 | Self::TUE.0 | Self::WED.0 | Self::THU.0 | Self::FRI.0)
    }

    pub fn mon_to_sat() -> Self {
        Self(Self::mon_to_fri().0 | Self::SAT.0)
    }

    pub fn all() -> Self {
        Self(Self::mon_to_sat().0 | Self::SUN.0)
    }

    pub fn contains(self, day: Self) -> bool {
        self.0 & day.0 == day.0
    }

    /// True iff `self` is a superset of `required` (e.g.
    /// `office_days ⊇ {Mon..Sat}`).
    pub fn is_superset_of(self, required: Self) -> bool {
        self.0 & required.0 == required.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn from_weekday(weekday: chrono::Weekday) -> Self {
        use chrono::Weekday::*;
        match weekday {
            Mon => Self::MON,
            Tue => Self::TUE,
            Wed => Self::WED,
            Thu => Self::THU,
            Fri => Self::FRI,
            Sat => Self::SAT,
            Sun => Self::SUN,
        }
    }
}

pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

pub trait Identifiable {
    fn id(&self) -> Uuid;
}
