use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};

/// Filter for the order listing. Unset fields match every order, so
/// `OrderSearch::default()` lists everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearch {
    pub member_name: Option<String>,
    pub order_status: Option<OrderStatus>,
}

impl OrderSearch {
    /// The member-name filter, or `None` when it is blank.
    pub fn member_name_filter(&self) -> Option<&str> {
        self.member_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
