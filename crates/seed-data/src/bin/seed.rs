//! Seeds the OctoFit database with the fixed sample dataset.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! The connection target comes from `MONGODB_URI` and `OCTOFIT_DB`,
//! defaulting to `mongodb://localhost:27017` / `octofit_db`.

use octofit::{Database, DatabaseConfig};
use seed_data::Seeder;
use seed_data::fixtures::SeedData;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig::from_env();
    let db = Database::connect(&config).await?;

    tracing::info!("Connected to database");

    let name = db.name().to_string();
    let summary = Seeder::new(db).run(&SeedData::sample()).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Teams: {}", summary.teams);
    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Activities: {}", summary.activities);
    tracing::info!("  Leaderboard entries: {}", summary.leaderboard);
    tracing::info!("  Workouts: {}", summary.workouts);

    println!("{name} database populated with test data.");

    Ok(())
}
