//! Read-only access to the jobs and candidates collections.

pub mod handlers;
pub mod queries;
