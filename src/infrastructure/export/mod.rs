//! Export - 下载文件与 HTML 演示文稿

mod documents;
mod presentation;

pub use documents::*;
pub use presentation::{render_presentation_html, EMPTY_SLIDE_PLACEHOLDER, MAX_RENDERED_BULLETS};
