// src/core/mod.rs

pub mod html;
pub mod page;
pub mod sanitize;

pub use html::HtmlPage;
pub use page::{Attrs, PageSource, Script};
