use serde::{Deserialize, Serialize};

use super::user::UserPublic;

/// Trainer-specific metadata, one-to-one with a user whose role is trainer.
///
/// `rating` is the running average of every rating ever recorded for the
/// trainer, rounded to one decimal place, and `rating_count` the number of
/// samples behind it. Both are maintained exclusively by the storage layer's
/// rating recording; no other path writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerProfile {
    pub id: i64,
    pub user_id: i64,
    pub years_of_experience: Option<i32>,
    pub certifications: Option<String>,
    pub specialization: Option<String>,
    pub price_per_session: Option<i64>,
    pub rating: f64,
    pub rating_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrainerProfile {
    pub user_id: i64,
    pub years_of_experience: Option<i32>,
    pub certifications: Option<String>,
    pub specialization: Option<String>,
    pub price_per_session: Option<i64>,
}

/// Metadata a trainer may change on their own profile. The rating aggregate
/// is absent on purpose.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrainerProfile {
    pub years_of_experience: Option<i32>,
    pub certifications: Option<String>,
    pub specialization: Option<String>,
    pub price_per_session: Option<i64>,
}

/// Trainer listing entry: the user joined with their optional profile.
#[derive(Debug, Clone, Serialize)]
pub struct TrainerWithProfile {
    #[serde(flatten)]
    pub user: UserPublic,
    pub trainer_profile: Option<TrainerProfile>,
}
