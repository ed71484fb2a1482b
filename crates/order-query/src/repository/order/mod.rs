mod query;
mod simple_query;

pub use self::query::OrderQueryRepository;
pub use self::simple_query::OrderSimpleQueryRepository;
