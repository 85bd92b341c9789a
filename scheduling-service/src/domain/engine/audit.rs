//! Turns the phase-local audit records the ATM and SysAid schedulers
//! emit into persistable [`AuditEntry`] rows.

use chrono::Utc;
use uuid::Uuid;

use super::atm_scheduler::AtmAuditRecord;
use super::sysaid_scheduler::SysaidAuditRecord;
use crate::domain::entities::AuditEntry;

pub fn from_atm_record(schedule_id: Uuid, record: AtmAuditRecord) -> AuditEntry {
    AuditEntry {
        id: Uuid::new_v4(),
        schedule_id,
        entry_date: Some(record.date),
        week_start: None,
        kind: record.kind,
        shift_label: Some(record.shift_label),
        chosen_member_id: record.chosen_member_id,
        candidates: sqlx::types::Json(record.candidates),
        tie_break_reason: record.tie_break_reason,
        warnings: sqlx::types::Json(record.warnings),
        created_at: Utc::now(),
    }
}

pub fn from_sysaid_record(schedule_id: Uuid, record: SysaidAuditRecord) -> AuditEntry {
    AuditEntry {
        id: Uuid::new_v4(),
        schedule_id,
        entry_date: None,
        week_start: Some(record.week_start),
        kind: record.kind,
        shift_label: None,
        chosen_member_id: record.chosen_member_id,
        candidates: sqlx::types::Json(record.candidates),
        tie_break_reason: record.tie_break_reason,
        warnings: sqlx::types::Json(record.warnings),
        created_at: Utc::now(),
    }
}
