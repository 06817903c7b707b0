//! HTTP Handlers

mod article;
mod author;
mod ping;

pub use article::*;
pub use author::*;
pub use ping::*;
