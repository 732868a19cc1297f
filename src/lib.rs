// src/lib.rs
//! Client library for the 491 JobSeeker backend: filtered, paginated job
//! search plus the auth and resume surfaces, with a thin CLI on top.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fetcher;
pub mod filters;
pub mod format;
pub mod pager;
pub mod render;
pub mod session;
pub mod types;
pub mod wizard;

pub use crate::config::ClientConfig;
pub use crate::core::ApiClient;
pub use crate::error::{ApiError, ApiResult};
pub use crate::fetcher::{FetchState, JobListFetcher, JobsApi};
pub use crate::filters::{FilterState, JobQuery};
pub use crate::types::{Job, JobsPage};
