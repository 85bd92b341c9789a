//! Integration tests for Scheduling Service API endpoints
//!
//! These tests use mock repositories to test the API handlers in isolation
//! without requiring a real database connection.

mod common;
mod swap_api_tests;
