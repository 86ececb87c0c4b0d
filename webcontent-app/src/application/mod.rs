mod extract_content;
mod search_web;

pub use extract_content::{ExtractContent, MAX_TEXT_CHARS};
pub use search_web::{SearchWeb, DEFAULT_LIMIT, MAX_LIMIT};
