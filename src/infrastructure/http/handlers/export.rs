//! Export HTTP Handlers
//!
//! 临时导出（不落库）和 HTML 幻灯片预览

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::domain::report::ContentType;
use crate::infrastructure::export::{
    self, adhoc_filename, content_disposition, presentation_filename, ExportFormat,
};
use crate::infrastructure::http::dto::{PresentationRequest, SaveTextRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonOrForm;
use crate::infrastructure::http::state::AppState;

/// TXT 临时导出文件名
const TXT_FILENAME: &str = "content.txt";

/// 构造附件响应
pub fn attachment(body: Vec<u8>, format: ExportFormat, filename: &str) -> Response {
    (
        [
            (CONTENT_TYPE, format.mime().to_string()),
            (CONTENT_DISPOSITION, content_disposition(filename)),
        ],
        body,
    )
        .into_response()
}

/// 导出 TXT
pub async fn save_txt(JsonOrForm(req): JsonOrForm<SaveTextRequest>) -> Response {
    attachment(export::txt(&req.text), ExportFormat::Txt, TXT_FILENAME)
}

/// 导出 DOCX（按内容类型选择论文或演示文稿格式）
pub async fn save_docx(JsonOrForm(req): JsonOrForm<SaveTextRequest>) -> Response {
    let content_type = ContentType::from_str(&req.content_type);
    let body = export::docx_for(content_type, &req.text, &req.title);
    attachment(
        body,
        ExportFormat::Docx,
        &adhoc_filename(content_type, ExportFormat::Docx),
    )
}

/// 导出演示文稿 DOCX
pub async fn save_presentation_docx(
    JsonOrForm(req): JsonOrForm<PresentationRequest>,
) -> Response {
    let body = export::presentation_docx(&req.content, &req.title);
    attachment(
        body,
        ExportFormat::Docx,
        &presentation_filename(&req.title, ExportFormat::Docx),
    )
}

/// 导出演示文稿 PDF
pub async fn save_presentation_pdf(
    JsonOrForm(req): JsonOrForm<PresentationRequest>,
) -> Response {
    let body = export::presentation_pdf(&req.content, &req.title);
    attachment(
        body,
        ExportFormat::Pdf,
        &presentation_filename(&req.title, ExportFormat::Pdf),
    )
}

/// HTML 幻灯片预览
pub async fn view_presentation(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<PresentationRequest>,
) -> Result<Html<String>, ApiError> {
    let title = if req.title.trim().is_empty() {
        export::DEFAULT_PRESENTATION_TITLE
    } else {
        req.title.as_str()
    };

    tracing::debug!(chars = req.content.chars().count(), "Rendering presentation");
    export::render_presentation_html(&req.content, title, &state.segmenter)
        .map(Html)
        .map_err(|e| ApiError::Internal(format!("Presentation render failed: {}", e)))
}
