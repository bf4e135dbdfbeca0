pub mod estimate;
pub mod handlers;
pub mod line;
pub mod middleware;
pub mod plan;
pub mod routes;

pub use routes::create_router;
