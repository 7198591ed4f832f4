use crate::error::{AppError, AppResult};
use crate::models::{Message, NewMessage, User};
use crate::storage::{DynStorage, Storage};

/// Append-only directed messaging between any two users.
#[derive(Clone)]
pub struct MessageService {
    store: DynStorage,
}

impl MessageService {
    pub fn new(store: DynStorage) -> Self {
        Self { store }
    }

    pub async fn send(&self, caller: &User, receiver_id: i64, content: String) -> AppResult<Message> {
        if content.trim().is_empty() {
            return Err(AppError::Validation(
                "message content must not be empty".to_string(),
            ));
        }
        self.store
            .user_by_id(receiver_id)
            .await?
            .ok_or(AppError::NotFound("receiver"))?;
        self.store
            .create_message(NewMessage {
                sender_id: caller.id,
                receiver_id,
                content,
            })
            .await
    }

    /// Full conversation between the caller and the other user, both
    /// directions, oldest first.
    pub async fn conversation(&self, caller: &User, other_id: i64) -> AppResult<Vec<Message>> {
        self.store.conversation(caller.id, other_id).await
    }

    /// Marks everything the other user sent to the caller as read.
    pub async fn mark_read(&self, caller: &User, other_id: i64) -> AppResult<()> {
        self.store.mark_messages_read(other_id, caller.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateUser, Role};
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    async fn setup() -> (MessageService, User, User) {
        let store: DynStorage = Arc::new(MemoryStore::new());
        let a = store
            .create_user(CreateUser {
                username: "a".into(),
                email: "a@example.com".into(),
                password_hash: "hash".into(),
                full_name: "A".into(),
                role: Role::Athlete,
                bio: None,
                profile_image: None,
                specialties: None,
            })
            .await
            .unwrap();
        let b = store
            .create_user(CreateUser {
                username: "b".into(),
                email: "b@example.com".into(),
                password_hash: "hash".into(),
                full_name: "B".into(),
                role: Role::Trainer,
                bio: None,
                profile_image: None,
                specialties: None,
            })
            .await
            .unwrap();
        (MessageService::new(store), a, b)
    }

    #[tokio::test]
    async fn empty_content_is_rejected() {
        let (service, a, b) = setup().await;
        let err = service.send(&a, b.id, "   ".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_receiver_is_not_found() {
        let (service, a, _b) = setup().await;
        let err = service.send(&a, 99, "hi".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("receiver")));
    }

    #[tokio::test]
    async fn messages_start_unread_and_mark_read_targets_the_caller() {
        let (service, a, b) = setup().await;
        service.send(&a, b.id, "hi".to_string()).await.unwrap();
        service.send(&b, a.id, "hello".to_string()).await.unwrap();

        // B marks messages from A as read; B's own message to A is untouched.
        service.mark_read(&b, a.id).await.unwrap();
        let conversation = service.conversation(&a, b.id).await.unwrap();
        assert_eq!(conversation.len(), 2);
        assert!(conversation[0].read);
        assert!(!conversation[1].read);
    }
}
