use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::Storage;
use crate::error::{AppError, AppResult};
use crate::models::{
    Connection, ConnectionStatus, ConnectionWithAthlete, ConnectionWithTrainer, CreateTrainerProfile,
    CreateUser, Message, NewConnection, NewMessage, NewNutritionPlan, NewProduct, NewRating,
    NewWorkoutPlan, NutritionGoal, NutritionPlan, NutritionPlanWithTrainer, PlanLevel, Product,
    ProductCategory, Rating, RatingWithAthlete, Role, TrainerProfile, TrainerWithProfile,
    UpdateTrainerProfile, UpdateUser, User, UserPublic, WorkoutPlan, WorkoutPlanWithTrainer,
};

/// PostgreSQL storage backend. Enum fields are stored as text columns and
/// validated on the way out; an unknown value in the database is a
/// consistency error, not a parse failure to paper over.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Internal(e.into()))
    }

    /// Batch-resolves foreign keys to public users; a missing id is a
    /// consistency error.
    async fn users_by_ids(
        &self,
        ids: &[i64],
        context: &str,
    ) -> AppResult<HashMap<i64, UserPublic>> {
        let rows = sqlx::query("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;
        let mut users = HashMap::with_capacity(rows.len());
        for row in &rows {
            let user = user_from_row(row)?;
            users.insert(user.id, UserPublic::from(user));
        }
        for id in ids {
            if !users.contains_key(id) {
                return Err(AppError::Consistency(format!(
                    "user {id} missing for {context}"
                )));
            }
        }
        Ok(users)
    }
}

fn parse_enum<T>(raw: &str, parse: fn(&str) -> Option<T>, what: &str) -> AppResult<T> {
    parse(raw).ok_or_else(|| AppError::Consistency(format!("unknown {what} value '{raw}'")))
}

/// Pulls one user out of a `users_by_ids` result. A missing entry is the same
/// broken-reference condition the batch lookup reports, surfaced locally.
fn public_user_from(
    users: &HashMap<i64, UserPublic>,
    id: i64,
    context: &str,
) -> AppResult<UserPublic> {
    users
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::Consistency(format!("user {id} missing for {context}")))
}

fn user_from_row(row: &PgRow) -> AppResult<User> {
    let role: String = row.try_get("role")?;
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        full_name: row.try_get("full_name")?,
        role: parse_enum(&role, Role::from_str, "role")?,
        bio: row.try_get("bio")?,
        profile_image: row.try_get("profile_image")?,
        specialties: row.try_get("specialties")?,
        created_at: row.try_get("created_at")?,
    })
}

fn profile_from_row(row: &PgRow) -> AppResult<TrainerProfile> {
    Ok(TrainerProfile {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        years_of_experience: row.try_get("years_of_experience")?,
        certifications: row.try_get("certifications")?,
        specialization: row.try_get("specialization")?,
        price_per_session: row.try_get("price_per_session")?,
        rating: row.try_get("rating")?,
        rating_count: row.try_get("rating_count")?,
    })
}

fn workout_plan_from_row(row: &PgRow) -> AppResult<WorkoutPlan> {
    let level: String = row.try_get("level")?;
    Ok(WorkoutPlan {
        id: row.try_get("id")?,
        trainer_id: row.try_get("trainer_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        duration_weeks: row.try_get("duration_weeks")?,
        level: parse_enum(&level, PlanLevel::from_str, "plan level")?,
        price: row.try_get("price")?,
        image: row.try_get("image")?,
        created_at: row.try_get("created_at")?,
    })
}

fn nutrition_plan_from_row(row: &PgRow) -> AppResult<NutritionPlan> {
    let goal: String = row.try_get("goal")?;
    Ok(NutritionPlan {
        id: row.try_get("id")?,
        trainer_id: row.try_get("trainer_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        duration_weeks: row.try_get("duration_weeks")?,
        goal: parse_enum(&goal, NutritionGoal::from_str, "nutrition goal")?,
        price: row.try_get("price")?,
        image: row.try_get("image")?,
        created_at: row.try_get("created_at")?,
    })
}

fn product_from_row(row: &PgRow) -> AppResult<Product> {
    let category: String = row.try_get("category")?;
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        image: row.try_get("image")?,
        category: parse_enum(&category, ProductCategory::from_str, "product category")?,
        in_stock: row.try_get("in_stock")?,
        created_at: row.try_get("created_at")?,
    })
}

fn connection_from_row(row: &PgRow) -> AppResult<Connection> {
    let status: String = row.try_get("status")?;
    Ok(Connection {
        id: row.try_get("id")?,
        trainer_id: row.try_get("trainer_id")?,
        athlete_id: row.try_get("athlete_id")?,
        status: parse_enum(&status, ConnectionStatus::from_str, "connection status")?,
        created_at: row.try_get("created_at")?,
    })
}

fn rating_from_row(row: &PgRow) -> AppResult<Rating> {
    Ok(Rating {
        id: row.try_get("id")?,
        trainer_id: row.try_get("trainer_id")?,
        athlete_id: row.try_get("athlete_id")?,
        rating: row.try_get("rating")?,
        review: row.try_get("review")?,
        created_at: row.try_get("created_at")?,
    })
}

fn message_from_row(row: &PgRow) -> AppResult<Message> {
    Ok(Message {
        id: row.try_get("id")?,
        sender_id: row.try_get("sender_id")?,
        receiver_id: row.try_get("receiver_id")?,
        content: row.try_get("content")?,
        read: row.try_get("read")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl Storage for PgStore {
    async fn create_user(&self, new: CreateUser) -> AppResult<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, full_name, role, bio, profile_image, specialties, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&new.username)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(&new.full_name)
        .bind(new.role.as_str())
        .bind(&new.bio)
        .bind(&new.profile_image)
        .bind(&new.specialties)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        user_from_row(&row)
    }

    async fn user_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                full_name = COALESCE($4, full_name),
                bio = COALESCE($5, bio),
                profile_image = COALESCE($6, profile_image),
                specialties = COALESCE($7, specialties)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.username)
        .bind(&changes.email)
        .bind(&changes.full_name)
        .bind(&changes.bio)
        .bind(&changes.profile_image)
        .bind(&changes.specialties)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound("user"))?;
        user_from_row(&row)
    }

    async fn create_trainer_profile(&self, new: CreateTrainerProfile) -> AppResult<TrainerProfile> {
        let row = sqlx::query(
            r#"
            INSERT INTO trainer_profiles (user_id, years_of_experience, certifications, specialization, price_per_session)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.user_id)
        .bind(new.years_of_experience)
        .bind(&new.certifications)
        .bind(&new.specialization)
        .bind(new.price_per_session)
        .fetch_one(&self.pool)
        .await?;
        profile_from_row(&row)
    }

    async fn trainer_profile(&self, user_id: i64) -> AppResult<Option<TrainerProfile>> {
        let row = sqlx::query("SELECT * FROM trainer_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(profile_from_row).transpose()
    }

    async fn update_trainer_profile(
        &self,
        user_id: i64,
        changes: UpdateTrainerProfile,
    ) -> AppResult<TrainerProfile> {
        let row = sqlx::query(
            r#"
            UPDATE trainer_profiles
            SET years_of_experience = COALESCE($2, years_of_experience),
                certifications = COALESCE($3, certifications),
                specialization = COALESCE($4, specialization),
                price_per_session = COALESCE($5, price_per_session)
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(changes.years_of_experience)
        .bind(&changes.certifications)
        .bind(&changes.specialization)
        .bind(changes.price_per_session)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound("trainer profile"))?;
        profile_from_row(&row)
    }

    async fn list_trainers(&self) -> AppResult<Vec<TrainerWithProfile>> {
        let rows = sqlx::query("SELECT * FROM users WHERE role = 'trainer' ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let mut trainers = Vec::with_capacity(rows.len());
        for row in &rows {
            let user = user_from_row(row)?;
            let trainer_profile = self.trainer_profile(user.id).await?;
            trainers.push(TrainerWithProfile {
                user: UserPublic::from(user),
                trainer_profile,
            });
        }
        Ok(trainers)
    }

    async fn trainer_by_id(&self, user_id: i64) -> AppResult<Option<TrainerWithProfile>> {
        let user = match self.user_by_id(user_id).await? {
            Some(user) if user.role == Role::Trainer => user,
            _ => return Ok(None),
        };
        let trainer_profile = self.trainer_profile(user_id).await?;
        Ok(Some(TrainerWithProfile {
            user: UserPublic::from(user),
            trainer_profile,
        }))
    }

    async fn create_workout_plan(&self, new: NewWorkoutPlan) -> AppResult<WorkoutPlan> {
        let row = sqlx::query(
            r#"
            INSERT INTO workout_plans (trainer_id, title, description, duration_weeks, level, price, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new.trainer_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.duration_weeks)
        .bind(new.level.as_str())
        .bind(new.price)
        .bind(&new.image)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        workout_plan_from_row(&row)
    }

    async fn workout_plan_by_id(&self, id: i64) -> AppResult<Option<WorkoutPlanWithTrainer>> {
        let row = sqlx::query("SELECT * FROM workout_plans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let plan = match row.as_ref().map(workout_plan_from_row).transpose()? {
            Some(plan) => plan,
            None => return Ok(None),
        };
        let users = self.users_by_ids(&[plan.trainer_id], "workout plan").await?;
        let trainer = public_user_from(&users, plan.trainer_id, "workout plan")?;
        Ok(Some(WorkoutPlanWithTrainer { plan, trainer }))
    }

    async fn list_workout_plans(&self) -> AppResult<Vec<WorkoutPlanWithTrainer>> {
        let rows = sqlx::query("SELECT * FROM workout_plans ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let plans: Vec<WorkoutPlan> = rows
            .iter()
            .map(workout_plan_from_row)
            .collect::<AppResult<_>>()?;
        let ids: Vec<i64> = plans.iter().map(|p| p.trainer_id).collect();
        let users = self.users_by_ids(&ids, "workout plan").await?;
        plans
            .into_iter()
            .map(|plan| {
                let trainer = public_user_from(&users, plan.trainer_id, "workout plan")?;
                Ok(WorkoutPlanWithTrainer { plan, trainer })
            })
            .collect()
    }

    async fn workout_plans_by_trainer(&self, trainer_id: i64) -> AppResult<Vec<WorkoutPlan>> {
        let rows = sqlx::query("SELECT * FROM workout_plans WHERE trainer_id = $1 ORDER BY id")
            .bind(trainer_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(workout_plan_from_row).collect()
    }

    async fn create_nutrition_plan(&self, new: NewNutritionPlan) -> AppResult<NutritionPlan> {
        let row = sqlx::query(
            r#"
            INSERT INTO nutrition_plans (trainer_id, title, description, duration_weeks, goal, price, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new.trainer_id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.duration_weeks)
        .bind(new.goal.as_str())
        .bind(new.price)
        .bind(&new.image)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        nutrition_plan_from_row(&row)
    }

    async fn nutrition_plan_by_id(&self, id: i64) -> AppResult<Option<NutritionPlanWithTrainer>> {
        let row = sqlx::query("SELECT * FROM nutrition_plans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let plan = match row.as_ref().map(nutrition_plan_from_row).transpose()? {
            Some(plan) => plan,
            None => return Ok(None),
        };
        let users = self
            .users_by_ids(&[plan.trainer_id], "nutrition plan")
            .await?;
        let trainer = public_user_from(&users, plan.trainer_id, "nutrition plan")?;
        Ok(Some(NutritionPlanWithTrainer { plan, trainer }))
    }

    async fn list_nutrition_plans(&self) -> AppResult<Vec<NutritionPlanWithTrainer>> {
        let rows = sqlx::query("SELECT * FROM nutrition_plans ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let plans: Vec<NutritionPlan> = rows
            .iter()
            .map(nutrition_plan_from_row)
            .collect::<AppResult<_>>()?;
        let ids: Vec<i64> = plans.iter().map(|p| p.trainer_id).collect();
        let users = self.users_by_ids(&ids, "nutrition plan").await?;
        plans
            .into_iter()
            .map(|plan| {
                let trainer = public_user_from(&users, plan.trainer_id, "nutrition plan")?;
                Ok(NutritionPlanWithTrainer { plan, trainer })
            })
            .collect()
    }

    async fn nutrition_plans_by_trainer(&self, trainer_id: i64) -> AppResult<Vec<NutritionPlan>> {
        let rows = sqlx::query("SELECT * FROM nutrition_plans WHERE trainer_id = $1 ORDER BY id")
            .bind(trainer_id)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(nutrition_plan_from_row).collect()
    }

    async fn create_product(&self, new: NewProduct) -> AppResult<Product> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, image, category, in_stock, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.image)
        .bind(new.category.as_str())
        .bind(new.in_stock)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        product_from_row(&row)
    }

    async fn product_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let row = sqlx::query("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(product_from_row).transpose()
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(product_from_row).collect()
    }

    async fn create_connection(&self, new: NewConnection) -> AppResult<Connection> {
        let row = sqlx::query(
            r#"
            INSERT INTO connections (trainer_id, athlete_id, status, created_at)
            VALUES ($1, $2, 'pending', $3)
            RETURNING *
            "#,
        )
        .bind(new.trainer_id)
        .bind(new.athlete_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        connection_from_row(&row)
    }

    async fn connection_by_id(&self, id: i64) -> AppResult<Option<Connection>> {
        let row = sqlx::query("SELECT * FROM connections WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(connection_from_row).transpose()
    }

    async fn athlete_connections(&self, athlete_id: i64) -> AppResult<Vec<ConnectionWithTrainer>> {
        let rows = sqlx::query("SELECT * FROM connections WHERE athlete_id = $1 ORDER BY id")
            .bind(athlete_id)
            .fetch_all(&self.pool)
            .await?;
        let connections: Vec<Connection> = rows
            .iter()
            .map(connection_from_row)
            .collect::<AppResult<_>>()?;
        let ids: Vec<i64> = connections.iter().map(|c| c.trainer_id).collect();
        let users = self.users_by_ids(&ids, "connection").await?;
        connections
            .into_iter()
            .map(|connection| {
                let trainer = public_user_from(&users, connection.trainer_id, "connection")?;
                Ok(ConnectionWithTrainer { connection, trainer })
            })
            .collect()
    }

    async fn trainer_connections(&self, trainer_id: i64) -> AppResult<Vec<ConnectionWithAthlete>> {
        let rows = sqlx::query("SELECT * FROM connections WHERE trainer_id = $1 ORDER BY id")
            .bind(trainer_id)
            .fetch_all(&self.pool)
            .await?;
        let connections: Vec<Connection> = rows
            .iter()
            .map(connection_from_row)
            .collect::<AppResult<_>>()?;
        let ids: Vec<i64> = connections.iter().map(|c| c.athlete_id).collect();
        let users = self.users_by_ids(&ids, "connection").await?;
        connections
            .into_iter()
            .map(|connection| {
                let athlete = public_user_from(&users, connection.athlete_id, "connection")?;
                Ok(ConnectionWithAthlete { connection, athlete })
            })
            .collect()
    }

    async fn update_connection_status(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> AppResult<Connection> {
        // The WHERE clause makes pending the only valid source state, so the
        // transition is atomic with the terminal check.
        let row = sqlx::query(
            "UPDATE connections SET status = $2 WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;
        if let Some(row) = row {
            return connection_from_row(&row);
        }
        match self.connection_by_id(id).await? {
            Some(existing) => Err(AppError::Validation(format!(
                "connection {id} is already {}",
                existing.status.as_str()
            ))),
            None => Err(AppError::NotFound("connection")),
        }
    }

    async fn record_rating(&self, new: NewRating) -> AppResult<Rating> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO ratings (trainer_id, athlete_id, rating, review, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.trainer_id)
        .bind(new.athlete_id)
        .bind(new.rating)
        .bind(&new.review)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;
        let rating = rating_from_row(&row)?;

        // Lock the profile row so concurrent submissions for the same trainer
        // serialize around the aggregate update. A missing profile skips the
        // aggregate on purpose.
        let profile = sqlx::query(
            "SELECT rating, rating_count FROM trainer_profiles WHERE user_id = $1 FOR UPDATE",
        )
        .bind(new.trainer_id)
        .fetch_optional(&mut *tx)
        .await?;
        if let Some(profile) = profile {
            let average: f64 = profile.try_get("rating")?;
            let count: i64 = profile.try_get("rating_count")?;
            let (new_average, new_count) = super::fold_rating(average, count, new.rating);
            sqlx::query(
                "UPDATE trainer_profiles SET rating = $2, rating_count = $3 WHERE user_id = $1",
            )
            .bind(new.trainer_id)
            .bind(new_average)
            .bind(new_count)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(rating)
    }

    async fn trainer_ratings(&self, trainer_id: i64) -> AppResult<Vec<RatingWithAthlete>> {
        let rows = sqlx::query("SELECT * FROM ratings WHERE trainer_id = $1 ORDER BY id")
            .bind(trainer_id)
            .fetch_all(&self.pool)
            .await?;
        let ratings: Vec<Rating> = rows.iter().map(rating_from_row).collect::<AppResult<_>>()?;
        let ids: Vec<i64> = ratings.iter().map(|r| r.athlete_id).collect();
        let users = self.users_by_ids(&ids, "rating").await?;
        ratings
            .into_iter()
            .map(|rating| {
                let athlete = public_user_from(&users, rating.athlete_id, "rating")?;
                Ok(RatingWithAthlete { rating, athlete })
            })
            .collect()
    }

    async fn create_message(&self, new: NewMessage) -> AppResult<Message> {
        let row = sqlx::query(
            r#"
            INSERT INTO messages (sender_id, receiver_id, content, read, created_at)
            VALUES ($1, $2, $3, FALSE, $4)
            RETURNING *
            "#,
        )
        .bind(new.sender_id)
        .bind(new.receiver_id)
        .bind(&new.content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        message_from_row(&row)
    }

    async fn conversation(&self, user_a: i64, user_b: i64) -> AppResult<Vec<Message>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(message_from_row).collect()
    }

    async fn mark_messages_read(&self, sender_id: i64, receiver_id: i64) -> AppResult<()> {
        sqlx::query(
            "UPDATE messages SET read = TRUE WHERE sender_id = $1 AND receiver_id = $2 AND read = FALSE",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
