//! 密码哈希（SHA-256 十六进制）

use sha2::{Digest, Sha256};

/// 计算密码的 SHA-256 十六进制摘要
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// 校验密码是否与存储的摘要一致
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(password_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("admin123"),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[test]
    fn test_verify() {
        let hash = hash_password("құпия");
        assert!(verify_password("құпия", &hash));
        assert!(!verify_password("wrong", &hash));
        assert_eq!(hash.len(), 64);
    }
}
