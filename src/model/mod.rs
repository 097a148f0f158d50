pub mod config;
pub mod schema;
pub mod style;
pub mod value;
