use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{connections, health, messages, plans, profile, ratings, trainers};
use crate::auth::identity_middleware;
use crate::services::{
    ConnectionService, MessageService, PlanService, RatingService, TrainerService, UserService,
};
use crate::storage::DynStorage;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub trainers: TrainerService,
    pub plans: PlanService,
    pub connections: ConnectionService,
    pub ratings: RatingService,
    pub messages: MessageService,
}

impl AppState {
    pub fn new(store: DynStorage) -> Self {
        Self {
            users: UserService::new(store.clone()),
            trainers: TrainerService::new(store.clone()),
            plans: PlanService::new(store.clone()),
            connections: ConnectionService::new(store.clone()),
            ratings: RatingService::new(store.clone()),
            messages: MessageService::new(store),
        }
    }
}

pub fn create_routes(store: DynStorage) -> Router {
    let state = AppState::new(store);

    let public = Router::new()
        .route("/trainers", get(trainers::list_trainers))
        .route("/trainers/:id", get(trainers::get_trainer))
        .route("/trainers/:id/ratings", get(ratings::trainer_ratings))
        .route(
            "/trainers/:id/workout-plans",
            get(plans::trainer_workout_plans),
        )
        .route(
            "/trainers/:id/nutrition-plans",
            get(plans::trainer_nutrition_plans),
        )
        .route("/workout-plans", get(plans::list_workout_plans))
        .route("/workout-plans/:id", get(plans::get_workout_plan))
        .route("/nutrition-plans", get(plans::list_nutrition_plans))
        .route("/nutrition-plans/:id", get(plans::get_nutrition_plan));

    let protected = Router::new()
        .route("/ratings", post(ratings::create_rating))
        .route("/connections", post(connections::create_connection))
        .route("/connections/:id", put(connections::update_connection))
        .route(
            "/connections/athlete",
            get(connections::athlete_connections),
        )
        .route(
            "/connections/trainer",
            get(connections::trainer_connections),
        )
        .route("/messages", post(messages::send_message))
        .route("/messages/read/:user_id", put(messages::mark_read))
        .route("/messages/:user_id", get(messages::conversation))
        .route("/profile", put(profile::update_profile))
        .route(
            "/trainer-profile",
            post(trainers::create_trainer_profile).put(trainers::update_trainer_profile),
        )
        .route("/trainer/workout-plans", post(plans::create_workout_plan))
        .route(
            "/trainer/nutrition-plans",
            post(plans::create_nutrition_plan),
        )
        .route_layer(middleware::from_fn_with_state(
            state.users.clone(),
            identity_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", public.merge(protected))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
