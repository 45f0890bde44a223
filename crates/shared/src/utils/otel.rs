use opentelemetry::Context;
use tokio::time::Instant;

/// Span context and start time of one in-flight API operation.
pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}
