pub mod config;
pub mod database;
pub mod job_processor;
pub mod member_directory_client;
pub mod redis;
pub mod repositories;

pub use job_processor::{GenerationJobStore, JobProcessor, ScheduleGenerationRequest, TeamLockRegistry};
