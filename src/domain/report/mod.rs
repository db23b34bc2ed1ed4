//! Report Context - 报告限界上下文
//!
//! 职责:
//! - 内容类型（论文 / 演示文稿）
//! - 生成语言
//! - 目标字数

mod value_objects;

pub use value_objects::{ContentType, Language, WordCount};
