//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{LoginUser, Logout, RegisterUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewUser, RepositoryError, SessionManagerPort, UserRepositoryPort};
use crate::domain::user::{hash_password, verify_password, Password, Username};

// ============================================================================
// RegisterUser
// ============================================================================

/// 注册响应
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
    pub user_id: i64,
    pub username: String,
}

/// RegisterUser Handler
pub struct RegisterUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl RegisterUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<RegisterUserResponse, ApplicationError> {
        let username = Username::new(command.username)?;
        let password = Password::new(command.password)?;
        let email = command
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        let new_user = NewUser {
            username: username.as_str().to_string(),
            password_hash: hash_password(password.as_str()),
            email,
        };

        let user = self.user_repo.create(&new_user).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => ApplicationError::conflict(
                "Бұл пайдаланушы аты бар қолданушы бұрыннан бар",
            ),
            other => other.into(),
        })?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(RegisterUserResponse {
            user_id: user.id,
            username: user.username,
        })
    }
}

// ============================================================================
// LoginUser
// ============================================================================

/// 登录响应
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub user_id: i64,
    pub username: String,
    /// 会话令牌（写入 Cookie）
    pub token: String,
}

/// LoginUser Handler
pub struct LoginUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    session_manager: Arc<dyn SessionManagerPort>,
}

impl LoginUserHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        session_manager: Arc<dyn SessionManagerPort>,
    ) -> Self {
        Self {
            user_repo,
            session_manager,
        }
    }

    pub async fn handle(&self, command: LoginUser) -> Result<LoginUserResponse, ApplicationError> {
        const BAD_CREDENTIALS: &str = "Пайдаланушы аты немесе пароль дұрыс емес";

        if command.username.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation("Барлық өрістерді толтырыңыз"));
        }

        let user = self
            .user_repo
            .find_by_username(command.username.trim())
            .await?
            .filter(|u| verify_password(&command.password, &u.password_hash))
            .ok_or_else(|| {
                tracing::warn!(username = %command.username, "Login rejected");
                ApplicationError::unauthorized(BAD_CREDENTIALS)
            })?;

        let token = self.session_manager.create(user.id, &user.username);

        tracing::info!(user_id = user.id, username = %user.username, "User logged in");

        Ok(LoginUserResponse {
            user_id: user.id,
            username: user.username,
            token,
        })
    }
}

// ============================================================================
// Logout
// ============================================================================

/// Logout Handler
pub struct LogoutHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl LogoutHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    /// 幂等：未知令牌视为已退出
    pub fn handle(&self, command: Logout) {
        if self.session_manager.close(&command.token).is_ok() {
            tracing::info!("User logged out");
        }
    }
}
