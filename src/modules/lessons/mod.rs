pub mod controller;
pub mod model;
pub mod router;
pub mod service;
pub mod unlock;

pub use model::*;
pub use router::init_lessons_router;
