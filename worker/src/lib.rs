pub mod message;
pub mod worker;
pub mod dispatch;
pub mod config;


pub use config::{ConfigError, WorkerConfig};
pub use dispatch::{build_pool, dispatch_batch, dispatch_lines};
pub use message::{RequestEnvelope, ResponseEnvelope, ResponseKind, WorkerError};
pub use worker::Worker;
