pub mod abstract_trait;
pub mod client;
pub mod di;
pub mod domain;
pub mod service;
pub mod state;

pub use self::state::BigCommerce;
pub use shared::config::BigCommerceConfig;
pub use shared::errors::{ApiError, ApiErrorEntry, ClientError};
