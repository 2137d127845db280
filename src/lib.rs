//! Newsroom Content
//!
//! A typed client for a headless news CMS content API, the CMS record
//! schemas, and a client for the site's identity service.
//!
//! # Features
//!
//! - Six typed queries (collections, stories, tag/author/all story lists,
//!   sections) over one shared request primitive
//! - Service-credential headers for the access proxy in front of the CMS
//! - A fixed per-call deadline
//! - Envelope unwrapping and pagination metadata on every response
//! - Every failure classified as HTTP, timeout, network, or unknown
//!
//! # Quick Start
//!
//! ```bash
//! CONTENT_CACHE_API_URL=https://cms.example.com ./newsroom-content tag politics --limit 10
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  ContentSource  ┌──────────────┐   GET + headers   ┌─────────────┐
//! │ page / CLI   │────────────────▶│  ContentApi  │──────────────────▶│ content API │
//! └──────────────┘◀────────────────└──────────────┘◀──────────────────└─────────────┘
//!                   ApiResponse<T>     unwrap envelope, classify errors
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod identity;
pub mod model;
pub mod traits;

#[cfg(test)]
mod test_utils;
