pub mod assignment_repository;
pub mod audit_log_repository;
pub mod fairness_ledger_repository;
pub mod schedule_repository;
pub mod swap_repository;

pub use assignment_repository::AssignmentRepository;
pub use audit_log_repository::AuditLogRepository;
pub use fairness_ledger_repository::FairnessLedgerRepository;
pub use schedule_repository::ScheduleRepository;
pub use swap_repository::SwapRepository;
