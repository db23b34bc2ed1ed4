//! User Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Пайдаланушы аты жарамсыз: {0}")]
    InvalidUsername(String),

    #[error("Пароль бос болмауы керек")]
    EmptyPassword,
}
