//! service-core: shared infrastructure for the course service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
