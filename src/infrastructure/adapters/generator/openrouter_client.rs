//! OpenRouter Client - 调用 OpenAI 兼容的 chat-completions 接口
//!
//! POST {api_url}
//! Request: {"model": "...", "messages": [...], "max_tokens": N, "temperature": T}
//! Response: {"choices": [{"message": {"content": "..."}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::prompts::build_prompts;
use crate::application::ports::{ContentGeneratorPort, GenerationRequest, GeneratorError};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenRouter 客户端配置
#[derive(Debug, Clone)]
pub struct OpenRouterClientConfig {
    /// chat-completions 完整 URL
    pub api_url: String,
    /// API 密钥，为空时不发起请求
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// HTTP-Referer 头
    pub referer: String,
    /// X-Title 头
    pub app_title: String,
}

impl Default for OpenRouterClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "openai/gpt-3.5-turbo".to_string(),
            max_tokens: 4000,
            temperature: 0.7,
            timeout_secs: 60,
            referer: "http://localhost:8000".to_string(),
            app_title: "AI Report Generator".to_string(),
        }
    }
}

/// OpenRouter 客户端
pub struct OpenRouterClient {
    client: Client,
    config: OpenRouterClientConfig,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterClientConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }
}

/// 取第一个非空回复
fn extract_content(response: ChatResponse) -> Result<String, GeneratorError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| GeneratorError::InvalidResponse("no choices in response".to_string()))
}

#[async_trait]
impl ContentGeneratorPort for OpenRouterClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        if !self.is_configured() {
            return Err(GeneratorError::NotConfigured("api_key is empty".to_string()));
        }

        let prompts = build_prompts(request);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompts.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompts.user,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(
            url = %self.config.api_url,
            model = %self.config.model,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else if e.is_connect() {
                    GeneratorError::NetworkError(format!("Cannot connect to generator: {}", e))
                } else {
                    GeneratorError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        extract_content(parsed)
    }

    fn name(&self) -> &'static str {
        "openrouter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{ContentType, Language, WordCount};

    #[test]
    fn test_config_default() {
        let config = OpenRouterClientConfig::default();
        assert_eq!(config.model, "openai/gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_request_serialization() {
        let body = ChatRequest {
            model: "m",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            max_tokens: 10,
            temperature: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 10);
    }

    #[test]
    fn test_extract_content() {
        let ok: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"СЛАЙД 1"}}]}"#).unwrap();
        assert_eq!(extract_content(ok).unwrap(), "СЛАЙД 1");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_content(empty),
            Err(GeneratorError::InvalidResponse(_))
        ));

        let missing: ChatResponse = serde_json::from_str(r#"{"error":"quota"}"#).unwrap();
        assert!(extract_content(missing).is_err());
    }

    #[tokio::test]
    async fn test_empty_key_not_configured() {
        let client = OpenRouterClient::new(OpenRouterClientConfig::default()).unwrap();
        assert!(!client.is_configured());

        let request = GenerationRequest {
            prompt: "Rust".to_string(),
            content_type: ContentType::Referat,
            language: Language::English,
            word_count: WordCount::default(),
        };
        let err = client.generate(&request).await.unwrap_err();
        assert!(matches!(err, GeneratorError::NotConfigured(_)));
    }
}
