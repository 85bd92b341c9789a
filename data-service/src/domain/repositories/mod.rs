pub mod member_repository;
pub mod membership_repository;
pub mod team_repository;
pub mod unavailability_repository;

pub use member_repository::MemberRepository;
pub use membership_repository::MembershipRepository;
pub use team_repository::TeamRepository;
pub use unavailability_repository::UnavailabilityRepository;
