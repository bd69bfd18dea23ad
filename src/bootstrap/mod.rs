pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_or_default};
pub use runtime::{AppRuntime, UseCases};
pub use tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, WiredDependencies};
