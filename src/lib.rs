pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{CategoryService, ToDoService};
pub use error::{AppError, AppResult};
pub use storage::Session;
