use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserPublic;

/// Lifecycle of a trainer-athlete relationship request.
///
/// `Pending` is the only initial state; `Accepted` and `Rejected` are
/// terminal. The storage layer refuses any transition whose source state is
/// not `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Accepted => "accepted",
            ConnectionStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ConnectionStatus::Pending),
            "accepted" => Some(ConnectionStatus::Accepted),
            "rejected" => Some(ConnectionStatus::Rejected),
            _ => None,
        }
    }

    /// A terminal status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConnectionStatus::Accepted | ConnectionStatus::Rejected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub id: i64,
    pub trainer_id: i64,
    pub athlete_id: i64,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewConnection {
    pub trainer_id: i64,
    pub athlete_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionWithTrainer {
    #[serde(flatten)]
    pub connection: Connection,
    pub trainer: UserPublic,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionWithAthlete {
    #[serde(flatten)]
    pub connection: Connection,
    pub athlete: UserPublic,
}
