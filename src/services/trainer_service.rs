use crate::error::{AppError, AppResult};
use crate::models::{
    CreateTrainerProfile, Role, TrainerProfile, TrainerWithProfile, UpdateTrainerProfile, User,
};
use crate::storage::{DynStorage, Storage};

/// Trainer directory and profile management.
#[derive(Clone)]
pub struct TrainerService {
    store: DynStorage,
}

impl TrainerService {
    pub fn new(store: DynStorage) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<TrainerWithProfile>> {
        self.store.list_trainers().await
    }

    pub async fn by_id(&self, user_id: i64) -> AppResult<TrainerWithProfile> {
        self.store
            .trainer_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound("trainer"))
    }

    /// Creates the caller's trainer profile; one per trainer.
    pub async fn create_profile(
        &self,
        caller: &User,
        changes: UpdateTrainerProfile,
    ) -> AppResult<TrainerProfile> {
        if caller.role != Role::Trainer {
            return Err(AppError::Forbidden);
        }
        if self.store.trainer_profile(caller.id).await?.is_some() {
            return Err(AppError::Validation(
                "trainer profile already exists".to_string(),
            ));
        }
        self.store
            .create_trainer_profile(CreateTrainerProfile {
                user_id: caller.id,
                years_of_experience: changes.years_of_experience,
                certifications: changes.certifications,
                specialization: changes.specialization,
                price_per_session: changes.price_per_session,
            })
            .await
    }

    /// Updates the caller's own profile metadata. The rating aggregate is not
    /// reachable from here.
    pub async fn update_profile(
        &self,
        caller: &User,
        changes: UpdateTrainerProfile,
    ) -> AppResult<TrainerProfile> {
        if caller.role != Role::Trainer {
            return Err(AppError::Forbidden);
        }
        self.store.update_trainer_profile(caller.id, changes).await
    }
}
