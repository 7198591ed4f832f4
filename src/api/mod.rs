// API routes and handlers

pub mod connections;
pub mod health;
pub mod messages;
pub mod plans;
pub mod profile;
pub mod ratings;
pub mod routes;
pub mod trainers;
