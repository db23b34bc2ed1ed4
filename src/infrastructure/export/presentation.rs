//! 演示文稿 HTML 渲染
//!
//! 将正文分割为幻灯片后通过 `presentation.html` 模板输出单文件 HTML（内联样式和脚本）

use minijinja::context;
use serde::Serialize;

use crate::domain::{clean_bullet, segment_slides, Slide, SlideSegmenterConfig};
use crate::infrastructure::templates::{self, TemplateError};

/// 每张幻灯片最多渲染的要点数
pub const MAX_RENDERED_BULLETS: usize = 10;

/// 幻灯片没有要点时的占位文字
pub const EMPTY_SLIDE_PLACEHOLDER: &str = "Ақпарат қосылады";

/// 模板中的一张幻灯片
#[derive(Debug, Serialize)]
struct SlideView<'a> {
    title: &'a str,
    has_bullets: bool,
    bullets: Vec<&'a str>,
}

impl<'a> From<&'a Slide> for SlideView<'a> {
    fn from(slide: &'a Slide) -> Self {
        Self {
            title: slide.title(),
            has_bullets: !slide.bullets().is_empty(),
            bullets: slide
                .bullets()
                .iter()
                .take(MAX_RENDERED_BULLETS)
                .map(|b| clean_bullet(b))
                .filter(|b| !b.is_empty())
                .collect(),
        }
    }
}

/// 渲染完整的 HTML 幻灯片
pub fn render_presentation_html(
    text: &str,
    title: &str,
    config: &SlideSegmenterConfig,
) -> Result<String, TemplateError> {
    let slides = segment_slides(text, config);
    let views: Vec<SlideView<'_>> = slides.iter().map(SlideView::from).collect();

    templates::render(
        templates::PRESENTATION_HTML,
        context! {
            title => title.trim(),
            slides => views,
            placeholder => EMPTY_SLIDE_PLACEHOLDER,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_escaped_and_cyrillic_kept() {
        let text = "ҚАЗАҚ ТІЛІ\n• \"A&B\" пункт";
        let html = render_presentation_html(text, "Қазақ", &SlideSegmenterConfig::default()).unwrap();
        assert!(html.contains("<li>&quot;A&amp;B&quot; пункт</li>"));
        assert!(html.contains(r#"<h1 class="slide-title">ҚАЗАҚ ТІЛІ</h1>"#));
    }

    #[test]
    fn test_render_slides_and_counter() {
        let text = "КІРІСПЕ\n• Пункт 1\n• Пункт 2\nҒЫЛЫМИ НЕГІЗДЕР\n• Пункт 3";
        let html = render_presentation_html(text, "Тест", &SlideSegmenterConfig::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Презентация: Тест</title>"));
        assert!(html.contains("Слайд 1 / 2"));
        assert_eq!(html.matches("class=\"slide\"").count(), 2);
        assert!(html.contains("<li>Пункт 1</li><li>Пункт 2</li>"));
        assert!(html.contains(r#"<h1 class="slide-title">ҒЫЛЫМИ НЕГІЗДЕР</h1>"#));
    }

    #[test]
    fn test_empty_slide_placeholder() {
        let html = render_presentation_html("ТАҚЫРЫП", "t", &SlideSegmenterConfig::default()).unwrap();
        assert!(html.contains("<p>Ақпарат қосылады</p>"));
    }

    #[test]
    fn test_bullets_capped() {
        let mut text = String::from("SLIDE 1");
        for i in 0..15 {
            text.push_str(&format!("\n• bullet number {}", i));
        }
        let html = render_presentation_html(&text, "t", &SlideSegmenterConfig::default()).unwrap();
        assert_eq!(html.matches("<li>").count(), MAX_RENDERED_BULLETS);
        assert!(html.contains("bullet number 9"));
        assert!(!html.contains("bullet number 10"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let text = "SLIDE <script>\n• a < b && c > d";
        let html = render_presentation_html(text, "<x>", &SlideSegmenterConfig::default()).unwrap();
        assert!(html.contains("SLIDE &lt;script&gt;"));
        assert!(html.contains("<li>a &lt; b &amp;&amp; c &gt; d</li>"));
        assert!(html.contains("Презентация: &lt;x&gt;"));
    }
}
