use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::{fold_rating, Storage};
use crate::error::{AppError, AppResult};
use crate::models::{
    Connection, ConnectionStatus, ConnectionWithAthlete, ConnectionWithTrainer, CreateTrainerProfile,
    CreateUser, Message, NewConnection, NewMessage, NewNutritionPlan, NewProduct, NewRating,
    NewWorkoutPlan, NutritionPlan, NutritionPlanWithTrainer, Product, Rating, RatingWithAthlete,
    Role, TrainerProfile, TrainerWithProfile, UpdateTrainerProfile, UpdateUser, User, UserPublic,
    WorkoutPlan, WorkoutPlanWithTrainer,
};

/// In-memory storage backend. Authoritative for tests; also the default
/// backend when no database is configured.
///
/// All collections live behind a single `RwLock`, so every mutation runs as
/// one critical section and readers never observe a half-applied
/// read-modify-write. BTreeMaps keep iteration in id order, which is also
/// insertion order because ids are allocated monotonically per entity type.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    trainer_profiles: BTreeMap<i64, TrainerProfile>,
    workout_plans: BTreeMap<i64, WorkoutPlan>,
    nutrition_plans: BTreeMap<i64, NutritionPlan>,
    products: BTreeMap<i64, Product>,
    connections: BTreeMap<i64, Connection>,
    ratings: BTreeMap<i64, Rating>,
    messages: BTreeMap<i64, Message>,
    next_ids: NextIds,
}

/// Per-entity-type id counters; uniqueness is guaranteed per type, not
/// globally.
struct NextIds {
    user: i64,
    trainer_profile: i64,
    workout_plan: i64,
    nutrition_plan: i64,
    product: i64,
    connection: i64,
    rating: i64,
    message: i64,
}

impl Default for NextIds {
    fn default() -> Self {
        Self {
            user: 1,
            trainer_profile: 1,
            workout_plan: 1,
            nutrition_plan: 1,
            product: 1,
            connection: 1,
            rating: 1,
            message: 1,
        }
    }
}

fn take_id(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

impl Inner {
    /// Resolves a foreign key to the public user shape. A dangling reference
    /// is a broken invariant, not a soft failure.
    fn public_user(&self, id: i64, context: &str) -> AppResult<UserPublic> {
        self.users
            .get(&id)
            .cloned()
            .map(UserPublic::from)
            .ok_or_else(|| AppError::Consistency(format!("user {id} missing for {context}")))
    }

    fn profile_for_user(&self, user_id: i64) -> Option<&TrainerProfile> {
        self.trainer_profiles.values().find(|p| p.user_id == user_id)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn create_user(&self, new: CreateUser) -> AppResult<User> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.user);
        let user = User {
            id,
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            full_name: new.full_name,
            role: new.role,
            bio: new.bio,
            profile_image: new.profile_image,
            specialties: new.specialties,
            created_at: Utc::now(),
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.read().users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .read()
            .users
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .read()
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let mut inner = self.write();
        let user = inner
            .users
            .get_mut(&id)
            .ok_or(AppError::NotFound("user"))?;
        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(full_name) = changes.full_name {
            user.full_name = full_name;
        }
        if let Some(bio) = changes.bio {
            user.bio = Some(bio);
        }
        if let Some(profile_image) = changes.profile_image {
            user.profile_image = Some(profile_image);
        }
        if let Some(specialties) = changes.specialties {
            user.specialties = Some(specialties);
        }
        Ok(user.clone())
    }

    async fn create_trainer_profile(&self, new: CreateTrainerProfile) -> AppResult<TrainerProfile> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.trainer_profile);
        let profile = TrainerProfile {
            id,
            user_id: new.user_id,
            years_of_experience: new.years_of_experience,
            certifications: new.certifications,
            specialization: new.specialization,
            price_per_session: new.price_per_session,
            rating: 0.0,
            rating_count: 0,
        };
        inner.trainer_profiles.insert(id, profile.clone());
        Ok(profile)
    }

    async fn trainer_profile(&self, user_id: i64) -> AppResult<Option<TrainerProfile>> {
        Ok(self.read().profile_for_user(user_id).cloned())
    }

    async fn update_trainer_profile(
        &self,
        user_id: i64,
        changes: UpdateTrainerProfile,
    ) -> AppResult<TrainerProfile> {
        let mut inner = self.write();
        let profile = inner
            .trainer_profiles
            .values_mut()
            .find(|p| p.user_id == user_id)
            .ok_or(AppError::NotFound("trainer profile"))?;
        if let Some(years) = changes.years_of_experience {
            profile.years_of_experience = Some(years);
        }
        if let Some(certifications) = changes.certifications {
            profile.certifications = Some(certifications);
        }
        if let Some(specialization) = changes.specialization {
            profile.specialization = Some(specialization);
        }
        if let Some(price) = changes.price_per_session {
            profile.price_per_session = Some(price);
        }
        Ok(profile.clone())
    }

    async fn list_trainers(&self) -> AppResult<Vec<TrainerWithProfile>> {
        let inner = self.read();
        Ok(inner
            .users
            .values()
            .filter(|u| u.role == Role::Trainer)
            .map(|u| TrainerWithProfile {
                user: UserPublic::from(u.clone()),
                trainer_profile: inner.profile_for_user(u.id).cloned(),
            })
            .collect())
    }

    async fn trainer_by_id(&self, user_id: i64) -> AppResult<Option<TrainerWithProfile>> {
        let inner = self.read();
        let user = match inner.users.get(&user_id) {
            Some(user) if user.role == Role::Trainer => user.clone(),
            _ => return Ok(None),
        };
        let trainer_profile = inner.profile_for_user(user_id).cloned();
        Ok(Some(TrainerWithProfile {
            user: UserPublic::from(user),
            trainer_profile,
        }))
    }

    async fn create_workout_plan(&self, new: NewWorkoutPlan) -> AppResult<WorkoutPlan> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.workout_plan);
        let plan = WorkoutPlan {
            id,
            trainer_id: new.trainer_id,
            title: new.title,
            description: new.description,
            duration_weeks: new.duration_weeks,
            level: new.level,
            price: new.price,
            image: new.image,
            created_at: Utc::now(),
        };
        inner.workout_plans.insert(id, plan.clone());
        Ok(plan)
    }

    async fn workout_plan_by_id(&self, id: i64) -> AppResult<Option<WorkoutPlanWithTrainer>> {
        let inner = self.read();
        let plan = match inner.workout_plans.get(&id) {
            Some(plan) => plan.clone(),
            None => return Ok(None),
        };
        let trainer = inner.public_user(plan.trainer_id, "workout plan")?;
        Ok(Some(WorkoutPlanWithTrainer { plan, trainer }))
    }

    async fn list_workout_plans(&self) -> AppResult<Vec<WorkoutPlanWithTrainer>> {
        let inner = self.read();
        inner
            .workout_plans
            .values()
            .map(|plan| {
                let trainer = inner.public_user(plan.trainer_id, "workout plan")?;
                Ok(WorkoutPlanWithTrainer {
                    plan: plan.clone(),
                    trainer,
                })
            })
            .collect()
    }

    async fn workout_plans_by_trainer(&self, trainer_id: i64) -> AppResult<Vec<WorkoutPlan>> {
        Ok(self
            .read()
            .workout_plans
            .values()
            .filter(|p| p.trainer_id == trainer_id)
            .cloned()
            .collect())
    }

    async fn create_nutrition_plan(&self, new: NewNutritionPlan) -> AppResult<NutritionPlan> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.nutrition_plan);
        let plan = NutritionPlan {
            id,
            trainer_id: new.trainer_id,
            title: new.title,
            description: new.description,
            duration_weeks: new.duration_weeks,
            goal: new.goal,
            price: new.price,
            image: new.image,
            created_at: Utc::now(),
        };
        inner.nutrition_plans.insert(id, plan.clone());
        Ok(plan)
    }

    async fn nutrition_plan_by_id(&self, id: i64) -> AppResult<Option<NutritionPlanWithTrainer>> {
        let inner = self.read();
        let plan = match inner.nutrition_plans.get(&id) {
            Some(plan) => plan.clone(),
            None => return Ok(None),
        };
        let trainer = inner.public_user(plan.trainer_id, "nutrition plan")?;
        Ok(Some(NutritionPlanWithTrainer { plan, trainer }))
    }

    async fn list_nutrition_plans(&self) -> AppResult<Vec<NutritionPlanWithTrainer>> {
        let inner = self.read();
        inner
            .nutrition_plans
            .values()
            .map(|plan| {
                let trainer = inner.public_user(plan.trainer_id, "nutrition plan")?;
                Ok(NutritionPlanWithTrainer {
                    plan: plan.clone(),
                    trainer,
                })
            })
            .collect()
    }

    async fn nutrition_plans_by_trainer(&self, trainer_id: i64) -> AppResult<Vec<NutritionPlan>> {
        Ok(self
            .read()
            .nutrition_plans
            .values()
            .filter(|p| p.trainer_id == trainer_id)
            .cloned()
            .collect())
    }

    async fn create_product(&self, new: NewProduct) -> AppResult<Product> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.product);
        let product = Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            image: new.image,
            category: new.category,
            in_stock: new.in_stock,
            created_at: Utc::now(),
        };
        inner.products.insert(id, product.clone());
        Ok(product)
    }

    async fn product_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.read().products.get(&id).cloned())
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.read().products.values().cloned().collect())
    }

    async fn create_connection(&self, new: NewConnection) -> AppResult<Connection> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.connection);
        let connection = Connection {
            id,
            trainer_id: new.trainer_id,
            athlete_id: new.athlete_id,
            status: ConnectionStatus::Pending,
            created_at: Utc::now(),
        };
        inner.connections.insert(id, connection.clone());
        Ok(connection)
    }

    async fn connection_by_id(&self, id: i64) -> AppResult<Option<Connection>> {
        Ok(self.read().connections.get(&id).cloned())
    }

    async fn athlete_connections(&self, athlete_id: i64) -> AppResult<Vec<ConnectionWithTrainer>> {
        let inner = self.read();
        inner
            .connections
            .values()
            .filter(|c| c.athlete_id == athlete_id)
            .map(|connection| {
                let trainer = inner.public_user(connection.trainer_id, "connection")?;
                Ok(ConnectionWithTrainer {
                    connection: connection.clone(),
                    trainer,
                })
            })
            .collect()
    }

    async fn trainer_connections(&self, trainer_id: i64) -> AppResult<Vec<ConnectionWithAthlete>> {
        let inner = self.read();
        inner
            .connections
            .values()
            .filter(|c| c.trainer_id == trainer_id)
            .map(|connection| {
                let athlete = inner.public_user(connection.athlete_id, "connection")?;
                Ok(ConnectionWithAthlete {
                    connection: connection.clone(),
                    athlete,
                })
            })
            .collect()
    }

    async fn update_connection_status(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> AppResult<Connection> {
        let mut inner = self.write();
        let connection = inner
            .connections
            .get_mut(&id)
            .ok_or(AppError::NotFound("connection"))?;
        if connection.status.is_terminal() {
            return Err(AppError::Validation(format!(
                "connection {id} is already {}",
                connection.status.as_str()
            )));
        }
        connection.status = status;
        Ok(connection.clone())
    }

    async fn record_rating(&self, new: NewRating) -> AppResult<Rating> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.rating);
        let rating = Rating {
            id,
            trainer_id: new.trainer_id,
            athlete_id: new.athlete_id,
            rating: new.rating,
            review: new.review,
            created_at: Utc::now(),
        };
        inner.ratings.insert(id, rating.clone());

        // Ratings may predate profile creation; a missing profile skips the
        // aggregate update without failing the recording.
        if let Some(profile) = inner
            .trainer_profiles
            .values_mut()
            .find(|p| p.user_id == new.trainer_id)
        {
            let (average, count) = fold_rating(profile.rating, profile.rating_count, new.rating);
            profile.rating = average;
            profile.rating_count = count;
        }

        Ok(rating)
    }

    async fn trainer_ratings(&self, trainer_id: i64) -> AppResult<Vec<RatingWithAthlete>> {
        let inner = self.read();
        inner
            .ratings
            .values()
            .filter(|r| r.trainer_id == trainer_id)
            .map(|rating| {
                let athlete = inner.public_user(rating.athlete_id, "rating")?;
                Ok(RatingWithAthlete {
                    rating: rating.clone(),
                    athlete,
                })
            })
            .collect()
    }

    async fn create_message(&self, new: NewMessage) -> AppResult<Message> {
        let mut inner = self.write();
        let id = take_id(&mut inner.next_ids.message);
        let message = Message {
            id,
            sender_id: new.sender_id,
            receiver_id: new.receiver_id,
            content: new.content,
            read: false,
            created_at: Utc::now(),
        };
        inner.messages.insert(id, message.clone());
        Ok(message)
    }

    async fn conversation(&self, user_a: i64, user_b: i64) -> AppResult<Vec<Message>> {
        let mut messages: Vec<Message> = self
            .read()
            .messages
            .values()
            .filter(|m| {
                (m.sender_id == user_a && m.receiver_id == user_b)
                    || (m.sender_id == user_b && m.receiver_id == user_a)
            })
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    async fn mark_messages_read(&self, sender_id: i64, receiver_id: i64) -> AppResult<()> {
        let mut inner = self.write();
        for message in inner.messages.values_mut() {
            if message.sender_id == sender_id && message.receiver_id == receiver_id && !message.read
            {
                message.read = true;
            }
        }
        Ok(())
    }
}
