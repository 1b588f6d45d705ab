//! Database seeding utilities.

use mongodb::Collection;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use octofit::Database;
use octofit::errors::{DbError, is_namespace_not_found};

use crate::fixtures::SeedData;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error(transparent)]
    Setup(#[from] DbError),
}

/// Inserted document counts from one seeding run, for operator reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    pub teams: usize,
    pub users: usize,
    pub activities: usize,
    pub leaderboard: usize,
    pub workouts: usize,
}

impl SeedSummary {
    /// Total documents inserted across the five collections.
    pub fn total(&self) -> usize {
        self.teams + self.users + self.activities + self.leaderboard + self.workouts
    }
}

/// Resets the five OctoFit collections to a fixed dataset.
///
/// The whole run is one sequential teardown-then-populate pass. It takes
/// no locks, so it must not run concurrently with itself or with anything
/// else using the same collections.
pub struct Seeder {
    db: Database,
}

impl Seeder {
    /// Creates a new seeder over the given database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Drops the five collections, recreates the unique email index, and
    /// inserts the dataset.
    ///
    /// The order is fixed: drops first, then the index over the now-empty
    /// `users` collection, then the inserts. Any failure aborts the
    /// remaining steps with no rollback, so collections processed before
    /// the failure keep whatever state they reached. The run is meant to
    /// be repeated from scratch, not resumed.
    pub async fn run(&self, data: &SeedData) -> Result<SeedSummary, SeedError> {
        self.drop_collections().await?;

        self.db.ensure_user_email_unique().await?;

        let teams = insert_batch(&self.db.teams(), &data.teams, "teams").await?;
        let users = insert_batch(&self.db.users(), &data.users, "users").await?;
        let activities = insert_batch(&self.db.activities(), &data.activities, "activities").await?;
        let leaderboard = insert_batch(
            &self.db.leaderboard(),
            &data.leaderboard,
            "leaderboard entries",
        )
        .await?;
        let workouts = insert_batch(&self.db.workouts(), &data.workouts, "workouts").await?;

        Ok(SeedSummary {
            teams,
            users,
            activities,
            leaderboard,
            workouts,
        })
    }

    /// Drops each seeded collection, tolerating ones that do not exist yet.
    /// Collections outside the five are never touched.
    async fn drop_collections(&self) -> Result<(), SeedError> {
        info!("Dropping existing collections...");

        drop_collection(&self.db.users()).await?;
        drop_collection(&self.db.teams()).await?;
        drop_collection(&self.db.activities()).await?;
        drop_collection(&self.db.leaderboard()).await?;
        drop_collection(&self.db.workouts()).await?;

        Ok(())
    }
}

/// Inserts a batch of documents and returns the inserted count.
async fn insert_batch<T>(
    collection: &Collection<T>,
    docs: &[T],
    label: &str,
) -> Result<usize, SeedError>
where
    T: Serialize + Send + Sync,
{
    if docs.is_empty() {
        return Ok(0);
    }

    info!("Seeding {} {}...", docs.len(), label);
    let result = collection.insert_many(docs).await?;
    info!("Seeded {} {}", result.inserted_ids.len(), label);

    Ok(result.inserted_ids.len())
}

/// Drops a collection; a missing collection is a no-op, not an error.
async fn drop_collection<T>(collection: &Collection<T>) -> Result<(), SeedError>
where
    T: Send + Sync,
{
    match collection.drop().await {
        Err(e) if !is_namespace_not_found(&e) => Err(e.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SeedData;

    #[test]
    fn test_summary_totals_sample_dataset() {
        let data = SeedData::sample();
        let summary = SeedSummary {
            teams: data.teams.len(),
            users: data.users.len(),
            activities: data.activities.len(),
            leaderboard: data.leaderboard.len(),
            workouts: data.workouts.len(),
        };

        assert_eq!(summary.total(), 17);
    }
}
