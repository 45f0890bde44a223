mod order;

pub use self::order::{
    OrderBody, OrderEditParams, OrderListParams, OrderProduct, OrderProducts,
};
