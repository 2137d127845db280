//! Workflow integration tests entry point.
//!
//! This module includes the multi-step workflow tests:
//! - Content: page assembly from collection, story and section queries
//! - Errors: every failure kind surfaced through the same error shape
//! - Login: email one-time-password login and registration

mod integration;
