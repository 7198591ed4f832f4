use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User roles. The marketplace has exactly two kinds of account; every
/// authorization decision matches exhaustively on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Athlete,
    Trainer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Athlete => "athlete",
            Role::Trainer => "trainer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "athlete" => Some(Role::Athlete),
            "trainer" => Some(Role::Trainer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub specialties: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub specialties: Option<String>,
}

/// Profile fields a user may change about themselves. Id, role and password
/// hash are deliberately absent: they are immutable through this path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub specialties: Option<String>,
}

/// User representation safe to return to clients (no password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub specialties: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            bio: user.bio,
            profile_image: user.profile_image,
            specialties: user.specialties,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(Role::from_str("athlete"), Some(Role::Athlete));
        assert_eq!(Role::from_str("Trainer"), Some(Role::Trainer));
        assert_eq!(Role::from_str("admin"), None);
        assert_eq!(Role::Athlete.as_str(), "athlete");
        assert_eq!(Role::Trainer.as_str(), "trainer");
    }
}
