//! HTTP Handlers

mod admin;
mod auth;
mod export;
mod generate;
mod ping;
mod report;

pub use admin::*;
pub use auth::*;
pub use export::*;
pub use generate::*;
pub use ping::*;
pub use report::*;
