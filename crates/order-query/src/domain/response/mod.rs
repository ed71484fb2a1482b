mod order;
mod simple_order;

pub use self::order::{DeliveryResponse, MemberResponse, OrderResponse};
pub use self::simple_order::SimpleOrderResponse;
