//! Domain models and MongoDB access layer for the OctoFit fitness tracker.
//!
//! OctoFit stores its data in five collections (`users`, `teams`,
//! `activities`, `leaderboard`, `workouts`) in the `octofit_db` database.
//! This crate provides the serde document types for those collections, the
//! connection configuration, and a thin [`Database`] wrapper with typed
//! collection accessors.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;

pub use config::DatabaseConfig;
pub use database::Database;
pub use errors::DbError;
