use crate::error::{AppError, AppResult};
use crate::models::{
    NewNutritionPlan, NewWorkoutPlan, NutritionPlan, NutritionPlanWithTrainer, Role, User,
    WorkoutPlan, WorkoutPlanWithTrainer,
};
use crate::storage::{DynStorage, Storage};

/// Trainer-authored workout and nutrition plans.
#[derive(Clone)]
pub struct PlanService {
    store: DynStorage,
}

impl PlanService {
    pub fn new(store: DynStorage) -> Self {
        Self { store }
    }

    /// Creates a workout plan owned by the caller; trainers only. The
    /// trainer id always comes from the caller, never the request body.
    pub async fn create_workout_plan(
        &self,
        caller: &User,
        mut new: NewWorkoutPlan,
    ) -> AppResult<WorkoutPlan> {
        if caller.role != Role::Trainer {
            return Err(AppError::Forbidden);
        }
        validate_plan_fields(&new.title, new.duration_weeks, new.price)?;
        new.trainer_id = caller.id;
        self.store.create_workout_plan(new).await
    }

    pub async fn create_nutrition_plan(
        &self,
        caller: &User,
        mut new: NewNutritionPlan,
    ) -> AppResult<NutritionPlan> {
        if caller.role != Role::Trainer {
            return Err(AppError::Forbidden);
        }
        validate_plan_fields(&new.title, new.duration_weeks, new.price)?;
        new.trainer_id = caller.id;
        self.store.create_nutrition_plan(new).await
    }

    pub async fn list_workout_plans(&self) -> AppResult<Vec<WorkoutPlanWithTrainer>> {
        self.store.list_workout_plans().await
    }

    pub async fn workout_plan(&self, id: i64) -> AppResult<WorkoutPlanWithTrainer> {
        self.store
            .workout_plan_by_id(id)
            .await?
            .ok_or(AppError::NotFound("workout plan"))
    }

    pub async fn workout_plans_by_trainer(&self, trainer_id: i64) -> AppResult<Vec<WorkoutPlan>> {
        self.store.workout_plans_by_trainer(trainer_id).await
    }

    pub async fn list_nutrition_plans(&self) -> AppResult<Vec<NutritionPlanWithTrainer>> {
        self.store.list_nutrition_plans().await
    }

    pub async fn nutrition_plan(&self, id: i64) -> AppResult<NutritionPlanWithTrainer> {
        self.store
            .nutrition_plan_by_id(id)
            .await?
            .ok_or(AppError::NotFound("nutrition plan"))
    }

    pub async fn nutrition_plans_by_trainer(
        &self,
        trainer_id: i64,
    ) -> AppResult<Vec<NutritionPlan>> {
        self.store.nutrition_plans_by_trainer(trainer_id).await
    }
}

fn validate_plan_fields(title: &str, duration_weeks: i32, price: i64) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }
    if duration_weeks <= 0 {
        return Err(AppError::Validation(format!(
            "duration must be positive, got {duration_weeks} weeks"
        )));
    }
    if price < 0 {
        return Err(AppError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}
