//! User administration business logic

use crate::domain::common::StringUuid;
use crate::domain::user::{CreateUserInput, UpdateUserInput, User, UserWithRoles};
use crate::error::{AppError, Result};
use crate::repository::{RoleRepository, UserRepository};
use std::sync::Arc;
use validator::Validate;

pub struct UserService<UR: UserRepository, RR: RoleRepository> {
    repo: Arc<UR>,
    role_repo: Arc<RR>,
}

impl<UR: UserRepository, RR: RoleRepository> UserService<UR, RR> {
    pub fn new(repo: Arc<UR>, role_repo: Arc<RR>) -> Self {
        Self { repo, role_repo }
    }

    /// Reject requests referencing role IDs that do not exist
    async fn verify_role_ids(&self, role_ids: &[StringUuid]) -> Result<()> {
        if role_ids.is_empty() {
            return Ok(());
        }
        let found = self.role_repo.find_by_ids(role_ids).await?;
        if found.len() != role_ids.len() {
            return Err(AppError::BadRequest(
                "One or more role IDs do not exist".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create(&self, input: CreateUserInput) -> Result<UserWithRoles> {
        input.validate()?;

        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User with email '{}' already exists",
                input.email
            )));
        }
        self.verify_role_ids(&input.role_ids).await?;

        let hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)?;
        let user = self.repo.create(&input, &hash).await?;
        self.with_roles(user).await
    }

    pub async fn get(&self, id: StringUuid) -> Result<UserWithRoles> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
        self.with_roles(user).await
    }

    pub async fn list(&self, page: i64, per_page: i64) -> Result<(Vec<UserWithRoles>, i64)> {
        let offset = (page - 1) * per_page;
        let users = self.repo.list(offset, per_page).await?;
        let total = self.repo.count().await?;

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            result.push(self.with_roles(user).await?);
        }
        Ok((result, total))
    }

    pub async fn update(&self, id: StringUuid, input: UpdateUserInput) -> Result<UserWithRoles> {
        input.validate()?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        if let Some(ref email) = input.email {
            if email != &existing.email {
                if self.repo.find_by_email(email).await?.is_some() {
                    return Err(AppError::Conflict(format!(
                        "User with email '{}' already exists",
                        email
                    )));
                }
            }
        }
        if let Some(ref role_ids) = input.role_ids {
            self.verify_role_ids(role_ids).await?;
        }

        let password_hash = match input.password {
            Some(ref password) => Some(bcrypt::hash(password, bcrypt::DEFAULT_COST)?),
            None => None,
        };

        let user = self.repo.update(id, &input, password_hash).await?;
        self.with_roles(user).await
    }

    pub async fn delete(&self, id: StringUuid) -> Result<()> {
        let _ = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
        self.repo.delete(id).await
    }

    pub async fn assign_role(&self, user_id: StringUuid, role_id: StringUuid) -> Result<()> {
        let _ = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;
        let _ = self
            .role_repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", role_id)))?;

        self.repo.assign_role(user_id, role_id).await
    }

    pub async fn remove_role(&self, user_id: StringUuid, role_id: StringUuid) -> Result<()> {
        let _ = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        self.repo.remove_role(user_id, role_id).await
    }

    async fn with_roles(&self, user: User) -> Result<UserWithRoles> {
        let roles = self.repo.find_roles(user.id).await?;
        Ok(UserWithRoles { user, roles })
    }
}
