pub mod config;
pub mod database;
pub mod member_directory_service;
pub mod redis;
pub mod repositories;

pub use member_directory_service::MemberDirectoryService;
