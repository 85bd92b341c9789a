pub mod schedule_request;
pub mod swap_request;

pub use schedule_request::CreateScheduleRequest;
pub use swap_request::{AdminDecisionRequest, CreateSwapRequest, PeerDecisionRequest};
