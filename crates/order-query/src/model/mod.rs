mod address;
mod delivery;
mod member;
mod order;

pub use self::address::Address;
pub use self::delivery::{Delivery, DeliveryStatus};
pub use self::member::Member;
pub use self::order::{Order, OrderRecord, OrderStatus};

use thiserror::Error;

/// A status column held a value outside its enumeration.
#[derive(Debug, Error)]
#[error("unknown {kind} status: '{value}'")]
pub struct UnknownStatus {
    pub kind: &'static str,
    pub value: String,
}
