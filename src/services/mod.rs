// Business logic services

pub mod connection_service;
pub mod message_service;
pub mod plan_service;
pub mod rating_service;
pub mod trainer_service;
pub mod user_service;

pub use connection_service::ConnectionService;
pub use message_service::MessageService;
pub use plan_service::PlanService;
pub use rating_service::RatingService;
pub use trainer_service::TrainerService;
pub use user_service::UserService;
