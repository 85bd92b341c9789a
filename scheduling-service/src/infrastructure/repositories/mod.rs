pub mod postgres_assignment_repository;
pub mod postgres_audit_log_repository;
pub mod postgres_fairness_ledger_repository;
pub mod postgres_schedule_repository;
pub mod postgres_swap_repository;

pub use postgres_assignment_repository::PostgresAssignmentRepository;
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_fairness_ledger_repository::PostgresFairnessLedgerRepository;
pub use postgres_schedule_repository::PostgresScheduleRepository;
pub use postgres_swap_repository::PostgresSwapRepository;
