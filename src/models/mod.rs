// Domain entities and their insert/update shapes

pub mod connection;
pub mod message;
pub mod plan;
pub mod product;
pub mod rating;
pub mod trainer;
pub mod user;

pub use connection::*;
pub use message::*;
pub use plan::*;
pub use product::*;
pub use rating::*;
pub use trainer::*;
pub use user::*;
