//! Session authentication extractors
//!
//! 从 Cookie 读取会话令牌，解析为当前用户

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;

/// 已登录用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
    pub username: String,
}

/// 可选登录用户
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

/// 管理员
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

/// 构造会话 Cookie
pub fn session_cookie(name: &str, token: String) -> Cookie<'static> {
    Cookie::build((name.to_string(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// 构造删除用的 Cookie（与写入时 path 一致）
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), "")).path("/").build()
}

/// 读取 Cookie 中的会话令牌
pub fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

async fn resolve_user(parts: &Parts, state: &AppState) -> Result<Option<CurrentUser>, ApiError> {
    let Some(token) = session_token(parts, &state.cookie_name) else {
        return Ok(None);
    };

    let session = match state.session_manager.get(&token) {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid session cookie");
            return Ok(None);
        }
    };

    // 用户已被删除时视为匿名
    match state.user_repo.find_by_id(session.user_id).await? {
        Some(user) => Ok(Some(CurrentUser {
            user_id: user.id,
            username: user.username,
        })),
        None => {
            let _ = state.session_manager.close(&token);
            Ok(None)
        }
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for MaybeUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        resolve_user(parts, state).await.map(MaybeUser)
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        resolve_user(parts, state)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Аутентификация қажет".to_string()))
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        match resolve_user(parts, state).await? {
            Some(user) if state.is_admin(&user.username) => Ok(AdminUser(user)),
            _ => Err(ApiError::Forbidden("Доступ запрещен".to_string())),
        }
    }
}
