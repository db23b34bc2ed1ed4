//! Report Context - Value Objects

use serde::{Deserialize, Serialize};

/// 内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// 论文（реферат）
    Referat,
    /// 演示文稿
    Presentation,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Referat => "referat",
            ContentType::Presentation => "presentation",
        }
    }

    /// 宽松解析：只有 "presentation" 是演示文稿，其余一律按论文处理
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "presentation" => ContentType::Presentation,
            _ => ContentType::Referat,
        }
    }

    /// 下载文件名前缀
    pub fn file_stem(&self) -> &'static str {
        match self {
            ContentType::Referat => "реферат",
            ContentType::Presentation => "презентация",
        }
    }

    pub fn is_presentation(&self) -> bool {
        matches!(self, ContentType::Presentation)
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Referat
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生成语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Kazakh,
    Russian,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kazakh => "kazakh",
            Language::Russian => "russian",
            Language::English => "english",
        }
    }

    /// 未知语言回退为哈萨克语
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "russian" => Language::Russian,
            "english" => Language::English,
            _ => Language::Kazakh,
        }
    }

    /// ISO 639-1 代码
    pub fn code(&self) -> &'static str {
        match self {
            Language::Kazakh => "kk",
            Language::Russian => "ru",
            Language::English => "en",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Kazakh
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 目标字数
///
/// 不变量: 取值在 [MIN, MAX] 区间内
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount(u32);

impl WordCount {
    pub const MIN: u32 = 100;
    pub const MAX: u32 = 5000;
    pub const DEFAULT: u32 = 500;

    /// 超出范围的值被截断到边界
    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
