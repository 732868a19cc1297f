// src/types/mod.rs
//! Wire and model types, one submodule per backend surface.

pub mod auth;
pub mod job;
pub mod resume;

pub use self::job::{EmploymentType, Job, JobsPage, WorkArrangement};
