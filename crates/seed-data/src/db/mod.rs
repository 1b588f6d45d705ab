//! Database integration for seeding sample data.
//!
//! The [`Seeder`] resets the OctoFit collections and inserts the fixed
//! dataset, with progress reporting.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
