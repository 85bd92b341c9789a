pub mod postgres_member_repository;
pub mod postgres_membership_repository;
pub mod postgres_team_repository;
pub mod postgres_unavailability_repository;

pub use postgres_member_repository::PostgresMemberRepository;
pub use postgres_membership_repository::PostgresMembershipRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_unavailability_repository::PostgresUnavailabilityRepository;
