//! Persistence Gateway: a per-request session over PostgreSQL and the queries it runs.

mod categories;
pub mod session;
mod todos;

pub use session::Session;
