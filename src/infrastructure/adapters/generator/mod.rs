//! Generator Adapter - 文本生成实现
//!
//! - OpenRouterClient: 调用外部 AI 服务
//! - TemplateGenerator: 静态模板回退

mod fallback_templates;
mod openrouter_client;
mod prompts;

pub use fallback_templates::{render_template, TemplateGenerator};
pub use openrouter_client::{OpenRouterClient, OpenRouterClientConfig};
pub use prompts::{build_prompts, PromptPair};
