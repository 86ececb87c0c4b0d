pub mod application;
pub mod domain;
pub mod infrastructure;

mod app_context;

pub use app_context::AppContext;
