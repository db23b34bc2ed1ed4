//! Report Commands

use crate::domain::report::{ContentType, Language, WordCount};

/// 生成内容命令
#[derive(Debug, Clone)]
pub struct GenerateContent {
    pub prompt: String,
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: WordCount,
}

/// 保存报告命令
#[derive(Debug, Clone)]
pub struct SaveReport {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: u32,
}
