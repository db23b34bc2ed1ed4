//! User Context - Value Objects

use serde::{Deserialize, Serialize};

use super::UserError;

/// 用户名
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub const MAX_CHARS: usize = 64;

    pub fn new(username: impl Into<String>) -> Result<Self, UserError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(UserError::InvalidUsername("бос".to_string()));
        }
        if username.chars().count() > Self::MAX_CHARS {
            return Err(UserError::InvalidUsername(format!(
                "{} таңбадан аспауы керек",
                Self::MAX_CHARS
            )));
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 明文密码（仅在注册 / 登录时短暂存在）
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Result<Self, UserError> {
        let password = password.into();
        if password.is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_trimmed() {
        let name = Username::new("  aigerim ").unwrap();
        assert_eq!(name.as_str(), "aigerim");
    }

    #[test]
    fn test_username_rejects_empty_and_long() {
        assert!(Username::new("   ").is_err());
        assert!(Username::new("ж".repeat(65)).is_err());
        assert!(Username::new("ж".repeat(64)).is_ok());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("secret").unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
        assert!(Password::new("").is_err());
    }
}
