mod query;
mod resolver;

pub use self::query::OrderSimpleQueryService;
