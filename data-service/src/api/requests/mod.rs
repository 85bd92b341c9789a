pub mod member_request;
pub mod membership_request;
pub mod team_request;
pub mod unavailability_request;

pub use member_request::{CreateMemberRequest, UpdateMemberRequest};
pub use membership_request::AddMemberRequest;
pub use team_request::{CreateTeamRequest, UpdateTeamRequest};
pub use unavailability_request::CreateUnavailablePeriodRequest;
