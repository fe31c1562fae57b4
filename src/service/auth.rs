//! Authentication flow: register, login, refresh rotation, logout

use crate::domain::auth::{LoginInput, RefreshInput, RegisterInput, TokenPair};
use crate::domain::common::StringUuid;
use crate::domain::user::{CreateUserInput, User};
use crate::error::{AppError, Result};
use crate::jwt::JwtManager;
use crate::repository::{RoleRepository, UserRepository};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct AuthService<UR: UserRepository, RR: RoleRepository> {
    user_repo: Arc<UR>,
    role_repo: Arc<RR>,
    jwt: JwtManager,
    access_token_ttl_secs: i64,
}

impl<UR: UserRepository, RR: RoleRepository> AuthService<UR, RR> {
    pub fn new(
        user_repo: Arc<UR>,
        role_repo: Arc<RR>,
        jwt: JwtManager,
        access_token_ttl_secs: i64,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            jwt,
            access_token_ttl_secs,
        }
    }

    pub async fn register(&self, input: RegisterInput) -> Result<TokenPair> {
        input.validate()?;

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User with email '{}' already exists",
                input.email
            )));
        }

        if !input.role_ids.is_empty() {
            let found = self.role_repo.find_by_ids(&input.role_ids).await?;
            if found.len() != input.role_ids.len() {
                return Err(AppError::BadRequest(
                    "One or more role IDs do not exist".to_string(),
                ));
            }
        }

        let hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)?;
        let create_input = CreateUserInput {
            email: input.email,
            password: input.password,
            first_name: input.first_name,
            last_name: input.last_name,
            role_ids: input.role_ids,
        };
        let user = self.user_repo.create(&create_input, &hash).await?;

        self.issue_tokens(&user).await
    }

    pub async fn login(&self, input: LoginInput) -> Result<TokenPair> {
        input.validate()?;

        // Same error for unknown email and wrong password
        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !bcrypt::verify(&input.password, &user.password)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        self.issue_tokens(&user).await
    }

    /// Rotate the refresh token: the presented token must match the stored
    /// per-user value, and a new pair replaces it.
    pub async fn refresh(&self, input: RefreshInput) -> Result<TokenPair> {
        let claims = self.jwt.verify_refresh_token(&input.refresh_token)?;
        let user_id: StringUuid = claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid refresh token".to_string()))?;

        match user.refresh_token {
            Some(ref stored) if stored == &input.refresh_token => {}
            _ => {
                return Err(AppError::Unauthorized(
                    "Invalid refresh token".to_string(),
                ))
            }
        }

        self.issue_tokens(&user).await
    }

    /// Clear the stored refresh token. Idempotent.
    pub async fn logout(&self, user_id: StringUuid) -> Result<()> {
        self.user_repo.update_refresh_token(user_id, None).await
    }

    async fn issue_tokens(&self, user: &User) -> Result<TokenPair> {
        let access_token = self
            .jwt
            .create_access_token(Uuid::from(user.id), &user.email)?;
        let refresh_token = self.jwt.create_refresh_token(Uuid::from(user.id))?;

        self.user_repo
            .update_refresh_token(user.id, Some(refresh_token.clone()))
            .await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_token_ttl_secs,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::repository::role::MockRoleRepository;
    use crate::repository::user::MockUserRepository;
    use mockall::predicate::*;

    fn test_jwt() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-unit-tests".to_string(),
            issuer: "dinemap-test".to_string(),
            access_token_ttl_secs: 3600,
            refresh_token_ttl_secs: 86400,
        })
    }

    fn test_service(
        user_repo: MockUserRepository,
    ) -> AuthService<MockUserRepository, MockRoleRepository> {
        AuthService::new(
            Arc::new(user_repo),
            Arc::new(MockRoleRepository::new()),
            test_jwt(),
            3600,
        )
    }

    fn hashed_user(password: &str) -> User {
        User {
            email: "admin@example.com".to_string(),
            password: bcrypt::hash(password, 4).unwrap(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .with(eq("admin@example.com"))
            .returning(|_| Ok(None));
        user_repo.expect_create().returning(|input, hash| {
            Ok(User {
                email: input.email.clone(),
                password: hash.to_string(),
                ..Default::default()
            })
        });
        user_repo
            .expect_update_refresh_token()
            .returning(|_, _| Ok(()));

        let service = test_service(user_repo);

        let input = RegisterInput {
            email: "admin@example.com".to_string(),
            password: "a-long-enough-password".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_ids: vec![],
        };
        let result = service.register(input).await;
        assert!(result.is_ok());

        let pair = result.unwrap();
        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_eq!(pair.token_type, "Bearer");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .with(eq("admin@example.com"))
            .returning(|_| Ok(Some(User::default())));

        let service = test_service(user_repo);

        let input = RegisterInput {
            email: "admin@example.com".to_string(),
            password: "a-long-enough-password".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_ids: vec![],
        };
        let result = service.register(input).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_unknown_role_id() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_email().returning(|_| Ok(None));

        let mut role_repo = MockRoleRepository::new();
        role_repo.expect_find_by_ids().returning(|_| Ok(vec![]));

        let service = AuthService::new(Arc::new(user_repo), Arc::new(role_repo), test_jwt(), 3600);

        let input = RegisterInput {
            email: "admin@example.com".to_string(),
            password: "a-long-enough-password".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_ids: vec![StringUuid::new_v4()],
        };
        let result = service.register(input).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = hashed_user("correct-password");
        let user_clone = user.clone();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .with(eq("admin@example.com"))
            .returning(move |_| Ok(Some(user_clone.clone())));
        user_repo
            .expect_update_refresh_token()
            .returning(|_, _| Ok(()));

        let service = test_service(user_repo);

        let input = LoginInput {
            email: "admin@example.com".to_string(),
            password: "correct-password".to_string(),
        };
        let result = service.login(input).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = hashed_user("correct-password");
        let user_clone = user.clone();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user_clone.clone())));

        let service = test_service(user_repo);

        let input = LoginInput {
            email: "admin@example.com".to_string(),
            password: "wrong-password".to_string(),
        };
        let result = service.login(input).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_email().returning(|_| Ok(None));

        let service = test_service(user_repo);

        let input = LoginInput {
            email: "nobody@example.com".to_string(),
            password: "whatever-password".to_string(),
        };
        let result = service.login(input).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_refresh_rotation() {
        let jwt = test_jwt();
        let mut user = User::default();
        let refresh_token = jwt.create_refresh_token(Uuid::from(user.id)).unwrap();
        user.refresh_token = Some(refresh_token.clone());
        let id = user.id;
        let user_clone = user.clone();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(user_clone.clone())));
        user_repo
            .expect_update_refresh_token()
            .withf(move |uid, token| *uid == id && token.is_some())
            .returning(|_, _| Ok(()));

        let service = AuthService::new(
            Arc::new(user_repo),
            Arc::new(MockRoleRepository::new()),
            jwt,
            3600,
        );

        let result = service
            .refresh(RefreshInput {
                refresh_token: refresh_token.clone(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_replaces_presented_token() {
        let jwt = test_jwt();
        let mut user = User::default();
        let old_token = jwt.create_refresh_token(Uuid::from(user.id)).unwrap();
        user.refresh_token = Some(old_token.clone());
        let id = user.id;
        let user_clone = user.clone();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(user_clone.clone())));
        // The stored token must change even when the new token is minted in
        // the same second as the old one
        let presented = old_token.clone();
        user_repo
            .expect_update_refresh_token()
            .withf(move |uid, token| *uid == id && token.as_deref() != Some(presented.as_str()))
            .returning(|_, _| Ok(()));

        let service = AuthService::new(
            Arc::new(user_repo),
            Arc::new(MockRoleRepository::new()),
            jwt,
            3600,
        );

        let pair = service
            .refresh(RefreshInput {
                refresh_token: old_token.clone(),
            })
            .await
            .unwrap();
        assert_ne!(pair.refresh_token, old_token);
    }

    #[tokio::test]
    async fn test_refresh_rejects_rotated_out_token() {
        let jwt = test_jwt();
        let mut user = User::default();
        let old_token = jwt.create_refresh_token(Uuid::from(user.id)).unwrap();
        // Stored token differs: the old one has been rotated out
        user.refresh_token = Some("a.newer.token".to_string());
        let user_clone = user.clone();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user_clone.clone())));

        let service = AuthService::new(
            Arc::new(user_repo),
            Arc::new(MockRoleRepository::new()),
            jwt,
            3600,
        );

        let result = service
            .refresh(RefreshInput {
                refresh_token: old_token,
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let jwt = test_jwt();
        let access = jwt
            .create_access_token(Uuid::new_v4(), "admin@example.com")
            .unwrap();

        let service = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockRoleRepository::new()),
            jwt,
            3600,
        );

        let result = service
            .refresh(RefreshInput {
                refresh_token: access,
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_logout_clears_refresh_token() {
        let id = StringUuid::new_v4();
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_update_refresh_token()
            .withf(move |uid, token| *uid == id && token.is_none())
            .returning(|_, _| Ok(()));

        let service = test_service(user_repo);

        let result = service.logout(id).await;
        assert!(result.is_ok());
    }
}
