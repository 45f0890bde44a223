mod myconfig;

pub use self::myconfig::{BigCommerceConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
