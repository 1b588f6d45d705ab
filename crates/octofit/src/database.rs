//! MongoDB access layer for the OctoFit collections.

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::config::DatabaseConfig;
use crate::errors::DbError;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};

/// Fixed collection names.
pub mod collections {
    pub const USERS: &str = "users";
    pub const TEAMS: &str = "teams";
    pub const ACTIVITIES: &str = "activities";
    pub const LEADERBOARD: &str = "leaderboard";
    pub const WORKOUTS: &str = "workouts";
}

/// Handle to the OctoFit database with typed collection accessors.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connects to the configured server and selects the OctoFit database.
    ///
    /// Issues a `ping` so that an unreachable server fails here rather
    /// than at the first write.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|source| DbError::Connection {
                uri: config.uri.clone(),
                source,
            })?;

        let db = client.database(&config.database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| DbError::Connection {
                uri: config.uri.clone(),
                source,
            })?;

        Ok(Self { db })
    }

    /// Wraps an already-selected database handle.
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }

    /// Name of the underlying database.
    pub fn name(&self) -> &str {
        self.db.name()
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(collections::USERS)
    }

    pub fn teams(&self) -> Collection<Team> {
        self.db.collection(collections::TEAMS)
    }

    pub fn activities(&self) -> Collection<Activity> {
        self.db.collection(collections::ACTIVITIES)
    }

    pub fn leaderboard(&self) -> Collection<LeaderboardEntry> {
        self.db.collection(collections::LEADERBOARD)
    }

    pub fn workouts(&self) -> Collection<Workout> {
        self.db.collection(collections::WORKOUTS)
    }

    /// Creates the unique ascending index on `users.email`.
    ///
    /// Creating an index identical to an existing one is a server-side
    /// no-op. Creating it over data that already violates uniqueness fails
    /// and is not retried; callers that need the index must empty the
    /// collection first.
    pub async fn ensure_user_email_unique(&self) -> Result<(), DbError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.users().create_index(index).await?;
        Ok(())
    }

    /// Raw handle for operations outside the typed accessors.
    pub fn inner(&self) -> &mongodb::Database {
        &self.db
    }
}
