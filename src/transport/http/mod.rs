pub mod router;
pub mod types;
pub mod handlers {
    pub mod categories;
    pub mod common;
    pub mod health;
    pub mod todos;
}

pub use router::{build_app, create_router, ApiDoc};
pub use types::AppState;
