//! Resource managers: one logical action per call, each inside its own session.

pub mod category_service;
pub mod todo_service;

pub use category_service::CategoryService;
pub use todo_service::ToDoService;
