use crate::error::{AppError, AppResult};
use crate::models::{
    Connection, ConnectionStatus, ConnectionWithAthlete, ConnectionWithTrainer, NewConnection,
    Role, User,
};
use crate::storage::{DynStorage, Storage};

/// Manages trainer-athlete relationship requests and their state machine.
#[derive(Clone)]
pub struct ConnectionService {
    store: DynStorage,
}

impl ConnectionService {
    pub fn new(store: DynStorage) -> Self {
        Self { store }
    }

    /// An athlete requests a connection to a trainer; status starts pending.
    pub async fn request(&self, caller: &User, trainer_id: i64) -> AppResult<Connection> {
        if caller.role != Role::Athlete {
            return Err(AppError::Forbidden);
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
            .create_connection(NewConnection {
                trainer_id,
                athlete_id: caller.id,
            })
            .await
    }

    /// The referenced trainer accepts or rejects a pending request. Anyone
    /// else gets Forbidden; a pending target status is a validation error.
    pub async fn respond(
        &self,
        caller: &User,
        connection_id: i64,
        status: ConnectionStatus,
    ) -> AppResult<Connection> {
        let connection = self
            .store
            .connection_by_id(connection_id)
            .await?
            .ok_or(AppError::NotFound("connection"))?;
        if connection.trainer_id != caller.id {
            return Err(AppError::Forbidden);
        }
        if status == ConnectionStatus::Pending {
            return Err(AppError::Validation(
                "status must be accepted or rejected".to_string(),
            ));
        }
        self.store
            .update_connection_status(connection_id, status)
            .await
    }

    pub async fn for_athlete(&self, caller: &User) -> AppResult<Vec<ConnectionWithTrainer>> {
        self.store.athlete_connections(caller.id).await
    }

    pub async fn for_trainer(&self, caller: &User) -> AppResult<Vec<ConnectionWithAthlete>> {
        self.store.trainer_connections(caller.id).await
    }
}
