//! Generate HTTP Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateContent;
use crate::domain::report::{ContentType, Language, WordCount};
use crate::infrastructure::http::dto::{ApiResponse, GenerateRequest, GenerateResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonOrForm;
use crate::infrastructure::http::state::AppState;

/// 生成论文或演示文稿正文
pub async fn generate(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<GenerateRequest>,
) -> Result<Json<ApiResponse<GenerateResponse>>, ApiError> {
    let word_count = req
        .word_count
        .map(WordCount::new)
        .unwrap_or_default();

    let result = state
        .generate_handler
        .handle(GenerateContent {
            prompt: req.prompt,
            content_type: ContentType::from_str(&req.content_type),
            language: Language::from_str(&req.language),
            word_count,
        })
        .await?;

    Ok(Json(ApiResponse::success(GenerateResponse {
        text: result.text,
        source: result.source.as_str(),
    })))
}
