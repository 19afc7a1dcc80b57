pub mod body;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod telemetry;

pub use catalog::MessageCatalog;
pub use config::GreeterConfig;
pub use errors::{GreeterError, Result};
pub use event::{InboundEvent, Response};
pub use handler::handle;
