//! 幻灯片分割器
//!
//! 将生成的演示文稿正文切分为有序的幻灯片（标题 + 要点）。
//! 单次前向扫描，首个命中的规则生效，不回溯、不打分。

use serde::{Deserialize, Serialize};

/// 标题行的最大字符数（不含）
pub const DEFAULT_MAX_TITLE_CHARS: usize = 100;

/// 非标记要点的最小字符数（不含）
pub const DEFAULT_MIN_BULLET_CHARS: usize = 10;

/// 未识别到任何标题时使用的占位标题
pub const DEFAULT_FALLBACK_TITLE: &str = "Презентация";

/// 要点前缀标记
const BULLET_MARKERS: [char; 2] = ['•', '-'];

/// 默认标题关键字（幻灯片 / 引言 / 结论）
pub fn default_title_markers() -> Vec<String> {
    ["слайд", "slide", "кіріспе", "қорытынды"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// 分割配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSegmenterConfig {
    /// 标题关键字（子串匹配，大小写不敏感）
    pub title_markers: Vec<String>,
    /// 全大写行被视为标题的长度上限
    pub max_title_chars: usize,
    /// 无前缀标记的行成为要点所需的最小长度
    pub min_bullet_chars: usize,
    /// 回退幻灯片标题
    pub fallback_title: String,
}

impl Default for SlideSegmenterConfig {
    fn default() -> Self {
        Self {
            title_markers: default_title_markers(),
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            min_bullet_chars: DEFAULT_MIN_BULLET_CHARS,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}

impl SlideSegmenterConfig {
    /// 使用自定义关键字创建配置，关键字统一转为小写
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title_markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
            ..Default::default()
        }
    }
}

/// 幻灯片
///
/// 不变量:
/// - 每个要点只属于一张幻灯片
/// - 序列中的位置即渲染顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    title: String,
    bullets: Vec<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullets,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }
}

/// 不含小写字母的行（无字母的行也算在内）
#[inline]
fn is_all_uppercase(line: &str) -> bool {
    line.to_uppercase() == line
}

fn is_title_line(line: &str, config: &SlideSegmenterConfig) -> bool {
    if is_all_uppercase(line) && line.chars().count() < config.max_title_chars {
        return true;
    }

    let lowered = line.to_lowercase();
    config
        .title_markers
        .iter()
        .any(|marker| lowered.contains(marker.as_str()))
}

fn is_bullet_line(line: &str, config: &SlideSegmenterConfig) -> bool {
    line.starts_with(BULLET_MARKERS)
        || (line.chars().count() > config.min_bullet_chars && !is_all_uppercase(line))
}

/// 对文本进行幻灯片分割
///
/// 分割策略：
/// 1. 按行分割，去除首尾空白，丢弃空行
/// 2. 标题行开启新幻灯片，之前打开的幻灯片入列
/// 3. 非标题行满足要点条件时追加到当前幻灯片，否则丢弃
/// 4. 没有识别到任何标题时，返回一张包含全部行的回退幻灯片
///
/// 结果永不为空。
pub fn segment_slides(text: &str, config: &SlideSegmenterConfig) -> Vec<Slide> {
    let lines: Vec<&str> = text
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let mut slides: Vec<Slide> = Vec::new();
    let mut current: Option<Slide> = None;

    for &line in &lines {
        if is_title_line(line, config) {
            if let Some(done) = current.take() {
                slides.push(done);
            }
            current = Some(Slide::new(line, Vec::new()));
        } else if let Some(slide) = current.as_mut() {
            if is_bullet_line(line, config) {
                slide.bullets.push(line.to_string());
            }
        }
    }

    if let Some(done) = current {
        slides.push(done);
    }

    if slides.is_empty() {
        slides.push(Slide::new(
            config.fallback_title.clone(),
            lines.iter().map(|s| s.to_string()).collect(),
        ));
    }

    slides
}

/// 使用默认配置分割（便捷方法）
pub fn segment_slides_default(text: &str) -> Vec<Slide> {
    segment_slides(text, &SlideSegmenterConfig::default())
}

/// 去除要点开头的 `•`、`-` 和空格，再去除首尾空白
pub fn clean_bullet(bullet: &str) -> &str {
    bullet
        .trim_start_matches(|c: char| c == '•' || c == '-' || c == ' ')
        .trim()
}
