//! The fixed sample dataset.
//!
//! Every seeding run writes exactly this payload. Cross-collection links
//! (`User.team`, `Activity.user`, `Workout.user`) are display-name strings
//! copied between documents, not references, and stay that way.

use octofit::models::{Activity, LeaderboardEntry, Team, User, Workout};

/// Complete payload for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub teams: Vec<Team>,
    pub users: Vec<User>,
    pub activities: Vec<Activity>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub workouts: Vec<Workout>,
}

impl SeedData {
    /// The built-in sample dataset: two superhero teams, their eight
    /// members, and a handful of activities, standings, and workouts.
    pub fn sample() -> Self {
        let teams = vec![
            Team::new("Marvel", ["Iron Man", "Captain America", "Thor", "Hulk"]),
            Team::new("DC", ["Superman", "Batman", "Wonder Woman", "Flash"]),
        ];

        let users = vec![
            User::new("Iron Man", "ironman@marvel.com", "Marvel"),
            User::new("Captain America", "cap@marvel.com", "Marvel"),
            User::new("Thor", "thor@marvel.com", "Marvel"),
            User::new("Hulk", "hulk@marvel.com", "Marvel"),
            User::new("Superman", "superman@dc.com", "DC"),
            User::new("Batman", "batman@dc.com", "DC"),
            User::new("Wonder Woman", "wonderwoman@dc.com", "DC"),
            User::new("Flash", "flash@dc.com", "DC"),
        ];

        let activities = vec![
            Activity::new("Iron Man", "Running", 30),
            Activity::new("Batman", "Cycling", 45),
            Activity::new("Wonder Woman", "Swimming", 60),
        ];

        let leaderboard = vec![
            LeaderboardEntry::new("Marvel", 120),
            LeaderboardEntry::new("DC", 110),
        ];

        let workouts = vec![
            Workout::with_reps("Thor", "Weightlifting", 100),
            Workout::with_distance("Flash", "Sprinting", 400),
        ];

        Self {
            teams,
            users,
            activities,
            leaderboard,
            workouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_counts() {
        let data = SeedData::sample();
        assert_eq!(data.teams.len(), 2);
        assert_eq!(data.users.len(), 8);
        assert_eq!(data.activities.len(), 3);
        assert_eq!(data.leaderboard.len(), 2);
        assert_eq!(data.workouts.len(), 2);
    }

    #[test]
    fn test_sample_emails_are_distinct() {
        let data = SeedData::sample();
        let emails: HashSet<&str> = data.users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), data.users.len());
    }

    #[test]
    fn test_every_user_belongs_to_a_sample_team() {
        let data = SeedData::sample();
        let team_names: HashSet<&str> = data.teams.iter().map(|t| t.name.as_str()).collect();

        for user in &data.users {
            assert!(
                team_names.contains(user.team.as_str()),
                "user {} has unknown team {}",
                user.name,
                user.team
            );
        }
    }

    #[test]
    fn test_team_rosters_match_user_names() {
        let data = SeedData::sample();

        for team in &data.teams {
            let roster: Vec<&str> = data
                .users
                .iter()
                .filter(|u| u.team == team.name)
                .map(|u| u.name.as_str())
                .collect();
            assert_eq!(team.members, roster);
        }
    }

    #[test]
    fn test_workouts_have_exactly_one_measurement() {
        let data = SeedData::sample();
        for workout in &data.workouts {
            assert!(
                workout.reps.is_some() ^ workout.distance.is_some(),
                "workout for {} must have reps or distance, not both",
                workout.user
            );
        }
    }
}
