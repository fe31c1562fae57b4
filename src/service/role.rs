//! Role business logic

use crate::domain::common::StringUuid;
use crate::domain::role::{CreateRoleInput, Role, UpdateRoleInput};
use crate::error::{AppError, Result};
use crate::repository::RoleRepository;
use std::sync::Arc;
use validator::Validate;

pub struct RoleService<R: RoleRepository> {
    repo: Arc<R>,
}

impl<R: RoleRepository> RoleService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateRoleInput) -> Result<Role> {
        input.validate()?;

        if self.repo.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Role '{}' already exists",
                input.name
            )));
        }

        self.repo.create(&input).await
    }

    pub async fn get(&self, id: StringUuid) -> Result<Role> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))
    }

    pub async fn list(&self, page: i64, per_page: i64) -> Result<(Vec<Role>, i64)> {
        let offset = (page - 1) * per_page;
        let roles = self.repo.list(offset, per_page).await?;
        let total = self.repo.count().await?;
        Ok((roles, total))
    }

    pub async fn update(&self, id: StringUuid, input: UpdateRoleInput) -> Result<Role> {
        input.validate()?;

        let existing = self.get(id).await?;

        if let Some(ref name) = input.name {
            if name != &existing.name {
                if self.repo.find_by_name(name).await?.is_some() {
                    return Err(AppError::Conflict(format!("Role '{}' already exists", name)));
                }
            }
        }

        self.repo.update(id, &input).await
    }

    pub async fn delete(&self, id: StringUuid) -> Result<()> {
        let _ = self.get(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::role::MockRoleRepository;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_create_role_success() {
        let mut mock = MockRoleRepository::new();
        mock.expect_find_by_name()
            .with(eq("editor"))
            .returning(|_| Ok(None));
        mock.expect_create().returning(|input| {
            Ok(Role {
                name: input.name.clone(),
                ..Default::default()
            })
        });

        let service = RoleService::new(Arc::new(mock));

        let input = CreateRoleInput {
            name: "editor".to_string(),
            description: None,
        };
        let result = service.create(input).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "editor");
    }

    #[tokio::test]
    async fn test_create_role_duplicate_name() {
        let mut mock = MockRoleRepository::new();
        mock.expect_find_by_name()
            .with(eq("editor"))
            .returning(|_| Ok(Some(Role::default())));

        let service = RoleService::new(Arc::new(mock));

        let input = CreateRoleInput {
            name: "editor".to_string(),
            description: None,
        };
        let result = service.create(input).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_role_not_found() {
        let mut mock = MockRoleRepository::new();
        let id = StringUuid::new_v4();
        mock.expect_find_by_id().with(eq(id)).returning(|_| Ok(None));

        let service = RoleService::new(Arc::new(mock));

        let result = service.get(id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
