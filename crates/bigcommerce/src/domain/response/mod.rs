mod api;
mod count;
mod order;

pub use self::api::ApiResponse;
pub use self::count::Count;
pub use self::order::{Order, Orders};
