//! Content Generator Port - 文本生成抽象
//!
//! 定义 AI 文本生成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::report::{ContentType, Language, WordCount};

/// 生成错误
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 生成请求
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// 主题
    pub prompt: String,
    pub content_type: ContentType,
    pub language: Language,
    pub word_count: WordCount,
}

/// Content Generator Port
#[async_trait]
pub trait ContentGeneratorPort: Send + Sync {
    /// 生成正文
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError>;

    /// 生成器名称（用于日志）
    fn name(&self) -> &'static str;
}
