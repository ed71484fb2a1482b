mod order_search;

pub use self::order_search::OrderSearch;
