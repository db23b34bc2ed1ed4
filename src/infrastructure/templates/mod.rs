//! Templates - minijinja 模板环境
//!
//! 所有模板编译进二进制，进程内共享一个 Environment。
//! `.html` 模板自动 HTML 转义，`.txt` 模板原样输出。

use std::sync::OnceLock;

use minijinja::{Environment, ErrorKind};
use serde::Serialize;

pub use minijinja::Error as TemplateError;

pub const PRESENTATION_HTML: &str = "presentation.html";
pub const KAZAKH_PRESENTATION: &str = "fallback/kazakh_presentation.txt";
pub const KAZAKH_REFERAT: &str = "fallback/kazakh_referat.txt";
pub const RUSSIAN_PRESENTATION: &str = "fallback/russian_presentation.txt";
pub const RUSSIAN_REFERAT: &str = "fallback/russian_referat.txt";
pub const ENGLISH_PRESENTATION: &str = "fallback/english_presentation.txt";
pub const ENGLISH_REFERAT: &str = "fallback/english_referat.txt";

const SOURCES: &[(&str, &str)] = &[
    (PRESENTATION_HTML, include_str!("presentation.html")),
    (KAZAKH_PRESENTATION, include_str!("fallback/kazakh_presentation.txt")),
    (KAZAKH_REFERAT, include_str!("fallback/kazakh_referat.txt")),
    (RUSSIAN_PRESENTATION, include_str!("fallback/russian_presentation.txt")),
    (RUSSIAN_REFERAT, include_str!("fallback/russian_referat.txt")),
    (ENGLISH_PRESENTATION, include_str!("fallback/english_presentation.txt")),
    (ENGLISH_REFERAT, include_str!("fallback/english_referat.txt")),
];

static ENVIRONMENT: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

fn build_environment() -> Result<Environment<'static>, String> {
    let mut env = Environment::new();
    for &(name, source) in SOURCES {
        env.add_template(name, source)
            .map_err(|e| format!("Template {} failed to compile: {}", name, e))?;
    }
    Ok(env)
}

/// 共享模板环境（首次调用时编译全部模板）
pub fn environment() -> Result<&'static Environment<'static>, TemplateError> {
    ENVIRONMENT
        .get_or_init(build_environment)
        .as_ref()
        .map_err(|msg| TemplateError::new(ErrorKind::InvalidOperation, msg.clone()))
}

/// 渲染指定模板
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, TemplateError> {
    environment()?.get_template(name)?.render(ctx)
}
