mod logs;
mod metadata;
mod metrics;
mod nullable;
mod otel;
mod parse_datetime;

pub use self::logs::init_logger;
pub use self::metadata::HeaderInjector;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::nullable::null_to_default;
pub use self::otel::TracingContext;
pub use self::parse_datetime::parse_datetime;
