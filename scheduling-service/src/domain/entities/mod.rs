pub mod assignment;
pub mod audit_entry;
pub mod fairness_count;
pub mod schedule;
pub mod swap;

pub use assignment::{Assignment, AssignmentResponse};
pub use audit_entry::{AuditEntry, AuditEntryResponse};
pub use fairness_count::FairnessCount;
pub use schedule::{Schedule, ScheduleResponse};
pub use swap::{Swap, SwapEffectiveState, SwapResponse};
