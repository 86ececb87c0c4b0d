pub mod fetcher;
pub mod html;
pub mod metadata;
pub mod readability;
pub mod search;
