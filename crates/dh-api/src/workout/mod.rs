pub mod date_format;
pub mod model;
pub mod routes;
pub mod service;

pub use routes::routes;
