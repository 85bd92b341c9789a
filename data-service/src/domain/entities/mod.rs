pub mod member;
pub mod team;
pub mod team_membership;
pub mod unavailable_period;

pub use member::{Member, MemberResponse};
pub use team::Team;
pub use team_membership::TeamMembership;
pub use unavailable_period::{UnavailablePeriod, UnavailablePeriodResponse};
