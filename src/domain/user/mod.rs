//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户名校验
//! - 密码哈希与校验

mod errors;
mod password;
mod value_objects;

pub use errors::UserError;
pub use password::{hash_password, verify_password};
pub use value_objects::{Password, Username};
