mod api;
mod client;

pub use self::api::{ApiError, ApiErrorEntry};
pub use self::client::ClientError;
