use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A team of athletes.
///
/// `members` holds display names copied from the users, not references;
/// team membership is informal and nothing enforces it against `users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub members: Vec<String>,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        members: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// An OctoFit account. `email` is globally unique, enforced by a unique
/// index on the collection. `team` is the team name as a plain string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub team: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            team: team.into(),
        }
    }
}

/// A logged activity: who did what, for how many minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: String,
    pub activity: String,
    pub duration: i32,
}

impl Activity {
    pub fn new(user: impl Into<String>, activity: impl Into<String>, duration: i32) -> Self {
        Self {
            id: None,
            user: user.into(),
            activity: activity.into(),
            duration,
        }
    }
}

/// A team's standing on the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub team: String,
    pub points: i32,
}

impl LeaderboardEntry {
    pub fn new(team: impl Into<String>, points: i32) -> Self {
        Self {
            id: None,
            team: team.into(),
            points,
        }
    }
}

/// A workout, measured either in reps or in distance depending on its kind.
///
/// The two measurements are mutually exclusive and the absent one is
/// omitted from the stored document entirely. Use [`Workout::with_reps`]
/// or [`Workout::with_distance`]; there is no constructor that sets both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: String,
    pub workout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i32>,
}

impl Workout {
    /// A rep-counted workout, e.g. weightlifting.
    pub fn with_reps(user: impl Into<String>, workout: impl Into<String>, reps: i32) -> Self {
        Self {
            id: None,
            user: user.into(),
            workout: workout.into(),
            reps: Some(reps),
            distance: None,
        }
    }

    /// A distance-measured workout, e.g. sprinting.
    pub fn with_distance(
        user: impl Into<String>,
        workout: impl Into<String>,
        distance: i32,
    ) -> Self {
        Self {
            id: None,
            user: user.into(),
            workout: workout.into(),
            reps: None,
            distance: Some(distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_team_serializes_without_id() {
        let team = Team::new("Marvel", ["Iron Man", "Captain America", "Thor", "Hulk"]);
        let document = to_document(&team).unwrap();
        assert_eq!(
            document,
            doc! {
                "name": "Marvel",
                "members": ["Iron Man", "Captain America", "Thor", "Hulk"],
            }
        );
    }

    #[test]
    fn test_workout_omits_absent_measurement() {
        let sprint = Workout::with_distance("Flash", "Sprinting", 400);
        let document = to_document(&sprint).unwrap();
        assert_eq!(
            document,
            doc! { "user": "Flash", "workout": "Sprinting", "distance": 400 }
        );
        assert!(!document.contains_key("reps"));

        let lift = Workout::with_reps("Thor", "Weightlifting", 100);
        let document = to_document(&lift).unwrap();
        assert!(!document.contains_key("distance"));
        assert_eq!(document.get_i32("reps").unwrap(), 100);
    }

    #[test]
    fn test_user_roundtrips_with_stored_id() {
        let id = ObjectId::new();
        let stored = doc! {
            "_id": id,
            "name": "Batman",
            "email": "batman@dc.com",
            "team": "DC",
        };

        let user: User = from_document(stored).unwrap();
        assert_eq!(user.id, Some(id));
        assert_eq!(user.email, "batman@dc.com");
        assert_eq!(user.team, "DC");
    }
}
