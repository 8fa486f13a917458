use crate::{auth::password::PasswordHash, error::Result};
use sqlx::PgPool;
use super::user_models::User;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &PasswordHash,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) RETURNING *"
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Hashes `plaintext` onto `user` and persists only the digest.
    pub async fn set_password(&self, user: &mut User, plaintext: &str, cost: u32) -> Result<()> {
        user.set_password(plaintext, cost)?;

        sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(user.password_hash())
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Overwrites only the fields that are `Some`. Returns `None` when no
    /// user has that username.
    pub async fn update_profile(
        &self,
        username: &str,
        location: Option<String>,
        languages: Option<String>,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET location = COALESCE($2, location),
                 languages = COALESCE($3, languages)
             WHERE username = $1
             RETURNING *"
        )
        .bind(username)
        .bind(location)
        .bind(languages)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    const TEST_COST: u32 = 4;

    async fn seed(repo: &UserRepository, username: &str, email: &str) -> User {
        let hash = PasswordHash::generate("pw1", TEST_COST).unwrap();
        repo.create(username, email, &hash).await.unwrap()
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_create_and_find(pool: PgPool) {
        let repo = UserRepository::new(pool);
        let created = seed(&repo, "alice", "a@x.com").await;

        let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
        let by_email = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(by_name.id, created.id);
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_id.username, "alice");
        assert!(by_name.verify_password("pw1"));
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_username_lookup_is_exact_match(pool: PgPool) {
        let repo = UserRepository::new(pool);
        seed(&repo, "alice", "a@x.com").await;

        assert!(repo.find_by_username("Alice").await.unwrap().is_none());
        assert!(repo.find_by_username("alice ").await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_duplicate_insert_is_conflict(pool: PgPool) {
        let repo = UserRepository::new(pool);
        seed(&repo, "alice", "a@x.com").await;

        let hash = PasswordHash::generate("pw2", TEST_COST).unwrap();
        let dup_name = repo.create("alice", "other@x.com", &hash).await;
        assert!(matches!(dup_name, Err(AppError::Conflict(_))));

        let dup_email = repo.create("bob", "a@x.com", &hash).await;
        assert!(matches!(dup_email, Err(AppError::Conflict(_))));
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_set_password_replaces_digest(pool: PgPool) {
        let repo = UserRepository::new(pool);
        let mut user = seed(&repo, "alice", "a@x.com").await;

        repo.set_password(&mut user, "new-secret", TEST_COST).await.unwrap();

        let stored = repo.find_by_username("alice").await.unwrap().unwrap();
        assert!(stored.verify_password("new-secret"));
        assert!(!stored.verify_password("pw1"));
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_partial_profile_update(pool: PgPool) {
        let repo = UserRepository::new(pool);
        seed(&repo, "alice", "a@x.com").await;

        repo.update_profile("alice", Some("Lisbon".into()), Some("pt, en".into()))
            .await
            .unwrap();

        let user = repo
            .update_profile("alice", Some("Porto".into()), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.location.as_deref(), Some("Porto"));
        assert_eq!(user.languages.as_deref(), Some("pt, en"));

        let user = repo
            .update_profile("alice", None, Some("en".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.location.as_deref(), Some("Porto"));
        assert_eq!(user.languages.as_deref(), Some("en"));
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_update_unknown_user(pool: PgPool) {
        let repo = UserRepository::new(pool);
        let result = repo.update_profile("ghost", Some("x".into()), None).await.unwrap();
        assert!(result.is_none());
    }
}
