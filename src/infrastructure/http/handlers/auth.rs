//! Auth HTTP Handlers

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use std::sync::Arc;

use crate::application::{LoginUser, Logout, RegisterUser};
use crate::infrastructure::http::auth::{removal_cookie, session_cookie, MaybeUser};
use crate::infrastructure::http::dto::{
    ApiResponse, Empty, LoginRequest, MeResponse, RegisterRequest, UserInfo,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonOrForm;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub username: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// 注册
pub async fn register(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<RegisterRequest>,
) -> Result<Json<ApiResponse<RegisterResponse>>, ApiError> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Барлық міндетті өрістерді толтырыңыз".to_string(),
        ));
    }

    let result = state
        .register_handler
        .handle(RegisterUser {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::success(RegisterResponse {
        user_id: result.user_id,
        username: result.username,
    })))
}

/// 登录，成功后写入会话 Cookie
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    JsonOrForm(req): JsonOrForm<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserInfo>>), ApiError> {
    let result = state
        .login_handler
        .handle(LoginUser {
            username: req.username,
            password: req.password,
        })
        .await?;

    let jar = jar.add(session_cookie(&state.cookie_name, result.token));
    let info = UserInfo {
        user_id: result.user_id,
        is_admin: state.is_admin(&result.username),
        username: result.username,
    };

    Ok((jar, Json(ApiResponse::success(info))))
}

/// 退出登录（幂等）
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<Empty>>) {
    if let Some(cookie) = jar.get(&state.cookie_name) {
        state.logout_handler.handle(Logout {
            token: cookie.value().to_string(),
        });
    }

    let jar = jar.remove(removal_cookie(&state.cookie_name));
    (jar, Json(ApiResponse::ok()))
}

/// 当前用户，未登录时 user 为 null
pub async fn me(
    State(state): State<Arc<AppState>>,
    MaybeUser(user): MaybeUser,
) -> Json<ApiResponse<MeResponse>> {
    let user = user.map(|u| UserInfo {
        user_id: u.user_id,
        is_admin: state.is_admin(&u.username),
        username: u.username,
    });

    Json(ApiResponse::success(MeResponse { user }))
}
