//! User Commands

/// 注册用户命令
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

/// 登录命令
#[derive(Debug, Clone)]
pub struct LoginUser {
    pub username: String,
    pub password: String,
}

/// 退出登录命令
#[derive(Debug, Clone)]
pub struct Logout {
    pub token: String,
}
