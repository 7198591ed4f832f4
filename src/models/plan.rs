use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserPublic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl PlanLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanLevel::Beginner => "beginner",
            PlanLevel::Intermediate => "intermediate",
            PlanLevel::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(PlanLevel::Beginner),
            "intermediate" => Some(PlanLevel::Intermediate),
            "advanced" => Some(PlanLevel::Advanced),
            _ => None,
        }
    }
}

impl NutritionGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionGoal::WeightLoss => "weight_loss",
            NutritionGoal::MuscleGain => "muscle_gain",
            NutritionGoal::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weight_loss" => Some(NutritionGoal::WeightLoss),
            "muscle_gain" => Some(NutritionGoal::MuscleGain),
            "maintenance" => Some(NutritionGoal::Maintenance),
            _ => None,
        }
    }
}

/// A trainer-authored workout program. Duration is in weeks, price in cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: i64,
    pub trainer_id: i64,
    pub title: String,
    pub description: String,
    pub duration_weeks: i32,
    pub level: PlanLevel,
    pub price: i64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkoutPlan {
    /// Ignored on the wire; the owning service sets it from the caller.
    #[serde(default)]
    pub trainer_id: i64,
    pub title: String,
    pub description: String,
    pub duration_weeks: i32,
    pub level: PlanLevel,
    pub price: i64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlanWithTrainer {
    #[serde(flatten)]
    pub plan: WorkoutPlan,
    pub trainer: UserPublic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub id: i64,
    pub trainer_id: i64,
    pub title: String,
    pub description: String,
    pub duration_weeks: i32,
    pub goal: NutritionGoal,
    pub price: i64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewNutritionPlan {
    /// Ignored on the wire; the owning service sets it from the caller.
    #[serde(default)]
    pub trainer_id: i64,
    pub title: String,
    pub description: String,
    pub duration_weeks: i32,
    pub goal: NutritionGoal,
    pub price: i64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlanWithTrainer {
    #[serde(flatten)]
    pub plan: NutritionPlan,
    pub trainer: UserPublic,
}
