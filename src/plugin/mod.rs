pub mod example;
pub mod host;
pub mod runtime;
pub mod tracker;

pub use host::{Host, LocalHost};
pub use runtime::{Plugin, PluginStatus};
pub use tracker::ChangeTracker;
