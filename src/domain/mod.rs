//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Report Context: 内容类型、语言、字数
//! - User Context: 用户名与密码
//!
//! 以及共享的幻灯片分割器

pub mod report;
pub mod user;

mod slides;

pub use slides::{
    clean_bullet, default_title_markers, segment_slides, segment_slides_default, Slide,
    SlideSegmenterConfig, DEFAULT_FALLBACK_TITLE, DEFAULT_MAX_TITLE_CHARS,
    DEFAULT_MIN_BULLET_CHARS,
};
