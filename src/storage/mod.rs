// Storage abstraction over the entity collections.
//
// Every mutating operation that involves a read-modify-write (rating
// aggregation, connection status transition, read-marking) is a single trait
// method so each backend can make it atomic: MemoryStore serializes writes
// behind one lock, PgStore uses transactions and conditional updates.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Connection, ConnectionStatus, ConnectionWithAthlete, ConnectionWithTrainer, CreateTrainerProfile,
    CreateUser, Message, NewConnection, NewMessage, NewNutritionPlan, NewProduct, NewRating,
    NewWorkoutPlan, NutritionPlan, NutritionPlanWithTrainer, Product, Rating, RatingWithAthlete,
    TrainerProfile, TrainerWithProfile, UpdateTrainerProfile, UpdateUser, User, WorkoutPlan,
    WorkoutPlanWithTrainer,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type DynStorage = Arc<dyn Storage>;

#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn create_user(&self, new: CreateUser) -> AppResult<User>;
    async fn user_by_id(&self, id: i64) -> AppResult<Option<User>>;
    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn user_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// Updates profile fields only; id, role and password hash are untouchable.
    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User>;

    // Trainer profiles
    async fn create_trainer_profile(&self, new: CreateTrainerProfile) -> AppResult<TrainerProfile>;
    async fn trainer_profile(&self, user_id: i64) -> AppResult<Option<TrainerProfile>>;
    /// Updates trainer metadata; the rating aggregate is only written by
    /// `record_rating`.
    async fn update_trainer_profile(
        &self,
        user_id: i64,
        changes: UpdateTrainerProfile,
    ) -> AppResult<TrainerProfile>;
    async fn list_trainers(&self) -> AppResult<Vec<TrainerWithProfile>>;
    async fn trainer_by_id(&self, user_id: i64) -> AppResult<Option<TrainerWithProfile>>;

    // Workout plans
    async fn create_workout_plan(&self, new: NewWorkoutPlan) -> AppResult<WorkoutPlan>;
    async fn workout_plan_by_id(&self, id: i64) -> AppResult<Option<WorkoutPlanWithTrainer>>;
    async fn list_workout_plans(&self) -> AppResult<Vec<WorkoutPlanWithTrainer>>;
    async fn workout_plans_by_trainer(&self, trainer_id: i64) -> AppResult<Vec<WorkoutPlan>>;

    // Nutrition plans
    async fn create_nutrition_plan(&self, new: NewNutritionPlan) -> AppResult<NutritionPlan>;
    async fn nutrition_plan_by_id(&self, id: i64) -> AppResult<Option<NutritionPlanWithTrainer>>;
    async fn list_nutrition_plans(&self) -> AppResult<Vec<NutritionPlanWithTrainer>>;
    async fn nutrition_plans_by_trainer(&self, trainer_id: i64) -> AppResult<Vec<NutritionPlan>>;

    // Products
    async fn create_product(&self, new: NewProduct) -> AppResult<Product>;
    async fn product_by_id(&self, id: i64) -> AppResult<Option<Product>>;
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    // Connections
    async fn create_connection(&self, new: NewConnection) -> AppResult<Connection>;
    async fn connection_by_id(&self, id: i64) -> AppResult<Option<Connection>>;
    async fn athlete_connections(&self, athlete_id: i64) -> AppResult<Vec<ConnectionWithTrainer>>;
    async fn trainer_connections(&self, trainer_id: i64) -> AppResult<Vec<ConnectionWithAthlete>>;
    /// Transitions a pending connection to `status`. Fails NotFound for an
    /// unknown id and with a validation error when the connection is already
    /// in a terminal state.
    async fn update_connection_status(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> AppResult<Connection>;

    // Ratings
    /// Appends the rating and, if a trainer profile exists, folds the sample
    /// into the running average in the same atomic step. A missing profile
    /// skips the aggregate update without error.
    async fn record_rating(&self, new: NewRating) -> AppResult<Rating>;
    async fn trainer_ratings(&self, trainer_id: i64) -> AppResult<Vec<RatingWithAthlete>>;

    // Messages
    async fn create_message(&self, new: NewMessage) -> AppResult<Message>;
    /// Both directions between the two users, ascending by creation time,
    /// ties broken by id.
    async fn conversation(&self, user_a: i64, user_b: i64) -> AppResult<Vec<Message>>;
    /// Flips `read` on every unread message from `sender_id` to
    /// `receiver_id`. Idempotent.
    async fn mark_messages_read(&self, sender_id: i64, receiver_id: i64) -> AppResult<()>;
}

/// Folds one sample into a running average, rounded to one decimal place.
pub(crate) fn fold_rating(average: f64, count: i64, sample: i32) -> (f64, i64) {
    let new_count = count + 1;
    let new_average = (average * count as f64 + f64::from(sample)) / new_count as f64;
    ((new_average * 10.0).round() / 10.0, new_count)
}
