//! User repository

use crate::domain::common::StringUuid;
use crate::domain::role::Role;
use crate::domain::user::{CreateUserInput, UpdateUserInput, User};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, input: &CreateUserInput, password_hash: &str) -> Result<User>;
    async fn find_by_id(&self, id: StringUuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>>;
    async fn count(&self) -> Result<i64>;
    async fn update(
        &self,
        id: StringUuid,
        input: &UpdateUserInput,
        password_hash: Option<String>,
    ) -> Result<User>;
    async fn update_refresh_token(
        &self,
        id: StringUuid,
        refresh_token: Option<String>,
    ) -> Result<()>;
    async fn delete(&self, id: StringUuid) -> Result<()>;

    // Role membership
    async fn set_roles(&self, user_id: StringUuid, role_ids: &[StringUuid]) -> Result<()>;
    async fn assign_role(&self, user_id: StringUuid, role_id: StringUuid) -> Result<()>;
    async fn remove_role(&self, user_id: StringUuid, role_id: StringUuid) -> Result<()>;
    async fn find_roles(&self, user_id: StringUuid) -> Result<Vec<Role>>;
}

pub struct UserRepositoryImpl {
    pool: MySqlPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, input: &CreateUserInput, password_hash: &str) -> Result<User> {
        let id = StringUuid::new_v4();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password, first_name, last_name, refresh_token, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, NULL, NOW(), NOW())
            "#,
        )
        .bind(id)
        .bind(&input.email)
        .bind(password_hash)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .execute(&mut *tx)
        .await?;

        for role_id in &input.role_ids {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)")
                .bind(id)
                .bind(*role_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create user")))
    }

    async fn find_by_id(&self, id: StringUuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, first_name, last_name, refresh_token, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, first_name, last_name, refresh_token, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, first_name, last_name, refresh_token, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn update(
        &self,
        id: StringUuid,
        input: &UpdateUserInput,
        password_hash: Option<String>,
    ) -> Result<User> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        let email = input.email.as_ref().unwrap_or(&existing.email);
        let password = password_hash.as_ref().unwrap_or(&existing.password);
        let first_name = input.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = input.last_name.as_ref().unwrap_or(&existing.last_name);

        sqlx::query(
            r#"
            UPDATE users
            SET email = ?, password = ?, first_name = ?, last_name = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(email)
        .bind(password)
        .bind(first_name)
        .bind(last_name)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if let Some(ref role_ids) = input.role_ids {
            self.set_roles(id, role_ids).await?;
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    async fn update_refresh_token(
        &self,
        id: StringUuid,
        refresh_token: Option<String>,
    ) -> Result<()> {
        sqlx::query("UPDATE users SET refresh_token = ?, updated_at = NOW() WHERE id = ?")
            .bind(&refresh_token)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: StringUuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    async fn set_roles(&self, user_id: StringUuid, role_ids: &[StringUuid]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_roles WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for role_id in role_ids {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(*role_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn assign_role(&self, user_id: StringUuid, role_id: StringUuid) -> Result<()> {
        // INSERT IGNORE keeps assignment idempotent
        sqlx::query("INSERT IGNORE INTO user_roles (user_id, role_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(role_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove_role(&self, user_id: StringUuid, role_id: StringUuid) -> Result<()> {
        sqlx::query("DELETE FROM user_roles WHERE user_id = ? AND role_id = ?")
            .bind(user_id)
            .bind(role_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_roles(&self, user_id: StringUuid) -> Result<Vec<Role>> {
        let roles = sqlx::query_as::<_, Role>(
            r#"
            SELECT r.id, r.name, r.description, r.created_at, r.updated_at
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = ?
            ORDER BY r.name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(roles)
    }
}
