//! Sample data seeding for the OctoFit database.
//!
//! This crate resets the five OctoFit collections (`users`, `teams`,
//! `activities`, `leaderboard`, `workouts`) to a fixed, known dataset so
//! the application always starts from the same state during development
//! and manual verification.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use octofit::{Database, DatabaseConfig};
//! use seed_data::{Seeder, fixtures::SeedData};
//!
//! let db = Database::connect(&DatabaseConfig::from_env()).await?;
//! let summary = Seeder::new(db).run(&SeedData::sample()).await?;
//! println!("inserted {} documents", summary.total());
//! ```
//!
//! Seeding is a plain teardown-then-populate sequence. It is not safe to
//! run concurrently with itself or with anything else reading or writing
//! the same collections.

pub mod db;
pub mod fixtures;

pub use db::{SeedError, SeedSummary, Seeder};
