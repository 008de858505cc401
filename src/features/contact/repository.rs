use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::log_db_error;
use crate::core::error::Result;
use crate::features::contact::models::{ContactMessage, NewContactMessage};

/// Contact message persistence
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> Result<ContactMessage>;

    /// Newest first
    async fn list(&self) -> Result<Vec<ContactMessage>>;

    /// `None` when the message does not exist
    async fn mark_read(&self, id: Uuid) -> Result<Option<ContactMessage>>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Postgres-backed contact message repository
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn insert(&self, message: NewContactMessage) -> Result<ContactMessage> {
        sqlx::query_as!(
            ContactMessage,
            r#"
            INSERT INTO contact_messages (id, name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, subject, message, is_read, created_at
            "#,
            Uuid::now_v7(),
            message.name,
            message.email,
            message.phone,
            message.subject,
            message.message
        )
        .fetch_one(&self.pool)
        .await
        .map_err(log_db_error("Failed to insert contact message"))
    }

    async fn list(&self) -> Result<Vec<ContactMessage>> {
        sqlx::query_as!(
            ContactMessage,
            r#"
            SELECT id, name, email, phone, subject, message, is_read, created_at
            FROM contact_messages
            ORDER BY created_at DESC, id DESC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(log_db_error("Failed to list contact messages"))
    }

    async fn mark_read(&self, id: Uuid) -> Result<Option<ContactMessage>> {
        sqlx::query_as!(
            ContactMessage,
            r#"
            UPDATE contact_messages SET is_read = TRUE
            WHERE id = $1
            RETURNING id, name, email, phone, subject, message, is_read, created_at
            "#,
            id
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(log_db_error("Failed to mark contact message as read"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query!("DELETE FROM contact_messages WHERE id = $1", id)
            .execute(&self.pool)
            .await
            .map_err(log_db_error("Failed to delete contact message"))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_message(subject: &str) -> NewContactMessage {
        NewContactMessage {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            subject: subject.to_string(),
            message: "Where is the nearest drive?".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_inbox_lifecycle(pool: PgPool) {
        let repo = PgContactRepository::new(pool);
        let first = repo.insert(new_message("First")).await.unwrap();
        let second = repo.insert(new_message("Second")).await.unwrap();
        assert!(!first.is_read);

        let inbox = repo.list().await.unwrap();
        let ids: Vec<Uuid> = inbox.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let read = repo.mark_read(first.id).await.unwrap().unwrap();
        assert!(read.is_read);
        // Marking twice keeps it read
        assert!(repo.mark_read(first.id).await.unwrap().unwrap().is_read);
        assert!(repo.mark_read(Uuid::now_v7()).await.unwrap().is_none());

        assert!(repo.delete(second.id).await.unwrap());
        assert!(!repo.delete(second.id).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
