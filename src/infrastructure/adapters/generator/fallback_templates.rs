//! Template Generator - AI 服务不可用时的静态模板
//!
//! 模板位于 `templates/fallback/`，`{{ topic | upper }}` 为大写主题，`{{ topic }}` 为原样主题

use async_trait::async_trait;
use minijinja::context;

use crate::application::ports::{ContentGeneratorPort, GenerationRequest, GeneratorError};
use crate::domain::report::{ContentType, Language};
use crate::infrastructure::templates::{self, TemplateError};

fn template_name(language: Language, content_type: ContentType) -> &'static str {
    match (language, content_type) {
        (Language::Kazakh, ContentType::Presentation) => templates::KAZAKH_PRESENTATION,
        (Language::Kazakh, ContentType::Referat) => templates::KAZAKH_REFERAT,
        (Language::Russian, ContentType::Presentation) => templates::RUSSIAN_PRESENTATION,
        (Language::Russian, ContentType::Referat) => templates::RUSSIAN_REFERAT,
        (Language::English, ContentType::Presentation) => templates::ENGLISH_PRESENTATION,
        (Language::English, ContentType::Referat) => templates::ENGLISH_REFERAT,
    }
}

/// 填充模板
pub fn render_template(
    topic: &str,
    content_type: ContentType,
    language: Language,
) -> Result<String, TemplateError> {
    templates::render(template_name(language, content_type), context! { topic => topic })
}

/// 模板生成器，内置模板编译通过后不会失败
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentGeneratorPort for TemplateGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        tracing::debug!(
            language = %request.language,
            content_type = %request.content_type,
            word_count = %request.word_count,
            "Rendering fallback template"
        );
        render_template(&request.prompt, request.content_type, request.language)
            .map_err(|e| GeneratorError::ServiceError(format!("Template render failed: {}", e)))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{segment_slides_default, DEFAULT_FALLBACK_TITLE};

    #[test]
    fn test_topic_substitution() {
        let text = render_template("Жасанды интеллект", ContentType::Presentation, Language::Kazakh).unwrap();
        assert!(text.starts_with("ПРЕЗЕНТАЦИЯ: ЖАСАНДЫ ИНТЕЛЛЕКТ"));
        assert!(!text.contains("{{"));

        let referat = render_template("ai", ContentType::Referat, Language::English).unwrap();
        assert!(referat.starts_with("ESSAY ON: \"AI\""));
        assert!(referat.contains("the topic \"ai\""));
    }

    #[test]
    fn test_russian_concepts_heading() {
        let text = render_template("x", ContentType::Presentation, Language::Russian).unwrap();
        assert!(text.contains("ОСНОВНЫЕ ПОНЯТИЯ"));
    }

    #[test]
    fn test_presentation_templates_segment_into_slides() {
        for language in [Language::Russian, Language::English] {
            let text = render_template("Rust", ContentType::Presentation, language).unwrap();
            let slides = segment_slides_default(&text);
            // 标题行 + 6 张带要点的幻灯片
            assert_eq!(slides.len(), 7, "language {}", language);
            assert!(slides.iter().all(|s| s.title() != DEFAULT_FALLBACK_TITLE));
            assert!(slides[1..].iter().all(|s| s.bullets().len() == 3));
        }
    }

    #[test]
    fn test_kazakh_keyword_bullet_opens_slide() {
        let text = render_template("Rust", ContentType::Presentation, Language::Kazakh).unwrap();
        let slides = segment_slides_default(&text);

        // "• Негізгі қорытындылар" 含关键字，被当作标题
        assert_eq!(slides.len(), 8);
        assert_eq!(slides[6].title(), "6-СЛАЙД: ҚОРЫТЫНДЫ");
        assert!(slides[6].bullets().is_empty());
        assert_eq!(slides[7].title(), "• Негізгі қорытындылар");
        assert_eq!(slides[7].bullets().len(), 2);
    }

    #[tokio::test]
    async fn test_generator_never_fails() {
        let generator = TemplateGenerator::new();
        let request = GenerationRequest {
            prompt: "Тест".to_string(),
            content_type: ContentType::Referat,
            language: Language::Russian,
            word_count: crate::domain::report::WordCount::default(),
        };
        let text = generator.generate(&request).await.unwrap();
        assert!(text.starts_with("РЕФЕРАТ НА ТЕМУ: \"ТЕСТ\""));
    }
}
