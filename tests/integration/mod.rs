//! Workflow tests against HTTP fakes.
//!
//! These tests verify end-to-end workflows including:
//! - Assembling a page from several content queries
//! - Error classification across failure kinds
//! - Email login and registration against the identity service

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod content_workflow;
mod error_recovery;
mod login_workflow;
