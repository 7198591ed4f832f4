use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserPublic;

/// An athlete's score for a trainer. Immutable once created: there is no
/// update or delete operation anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub trainer_id: i64,
    pub athlete_id: i64,
    pub rating: i32,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRating {
    pub trainer_id: i64,
    pub athlete_id: i64,
    pub rating: i32,
    pub review: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingWithAthlete {
    #[serde(flatten)]
    pub rating: Rating,
    pub athlete: UserPublic,
}
