use crate::error::{AppError, AppResult};
use crate::models::{NewRating, Rating, RatingWithAthlete, Role, User};
use crate::storage::{DynStorage, Storage};

/// Records athlete ratings and maintains the trainer's running average.
///
/// The aggregate arithmetic itself lives in the storage layer so it executes
/// atomically with the rating append; this service owns boundary validation.
#[derive(Clone)]
pub struct RatingService {
    store: DynStorage,
}

impl RatingService {
    pub fn new(store: DynStorage) -> Self {
        Self { store }
    }

    /// Records a rating from `caller` for the given trainer. Only athletes
    /// may rate; values are bounded to 1..=5 here, at the boundary.
    pub async fn record(
        &self,
        caller: &User,
        trainer_id: i64,
        value: i32,
        review: Option<String>,
    ) -> AppResult<Rating> {
        if caller.role != Role::Athlete {
            return Err(AppError::Forbidden);
        }
        if !(1..=5).contains(&value) {
            return Err(AppError::Validation(format!(
                "rating must be between 1 and 5, got {value}"
            )));
        }
        let trainer = self
            .store
            .user_by_id(trainer_id)
            .await?
            .ok_or(AppError::NotFound("trainer"))?;
        if trainer.role != Role::Trainer {
            return Err(AppError::Validation(format!(
                "user {trainer_id} is not a trainer"
            )));
        }

        self.store
            .record_rating(NewRating {
                trainer_id,
                athlete_id: caller.id,
                rating: value,
                review,
            })
            .await
    }

    pub async fn for_trainer(&self, trainer_id: i64) -> AppResult<Vec<RatingWithAthlete>> {
        self.store.trainer_ratings(trainer_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateUser;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    async fn setup() -> (RatingService, User, User) {
        let store: DynStorage = Arc::new(MemoryStore::new());
        let trainer = store
            .create_user(CreateUser {
                username: "coach".into(),
                email: "coach@example.com".into(),
                password_hash: "hash".into(),
                full_name: "Coach".into(),
                role: Role::Trainer,
                bio: None,
                profile_image: None,
                specialties: None,
            })
            .await
            .unwrap();
        let athlete = store
            .create_user(CreateUser {
                username: "ath".into(),
                email: "ath@example.com".into(),
                password_hash: "hash".into(),
                full_name: "Athlete".into(),
                role: Role::Athlete,
                bio: None,
                profile_image: None,
                specialties: None,
            })
            .await
            .unwrap();
        (RatingService::new(store), trainer, athlete)
    }

    #[tokio::test]
    async fn trainers_cannot_submit_ratings() {
        let (service, trainer, _athlete) = setup().await;
        let err = service
            .record(&trainer, trainer.id, 5, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn out_of_range_values_are_rejected() {
        let (service, trainer, athlete) = setup().await;
        for value in [0, 6, -1] {
            let err = service
                .record(&athlete, trainer.id, value, None)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn rating_a_non_trainer_is_rejected() {
        let (service, _trainer, athlete) = setup().await;
        let err = service
            .record(&athlete, athlete.id, 4, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn valid_rating_is_recorded_with_review() {
        let (service, trainer, athlete) = setup().await;
        let rating = service
            .record(&athlete, trainer.id, 4, Some("solid coaching".into()))
            .await
            .unwrap();
        assert_eq!(rating.trainer_id, trainer.id);
        assert_eq!(rating.athlete_id, athlete.id);
        assert_eq!(rating.rating, 4);

        let listed = service.for_trainer(trainer.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].athlete.id, athlete.id);
    }
}
