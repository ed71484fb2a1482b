mod query;
mod simple_query;

pub use self::query::{DynOrderQueryRepository, OrderQueryRepositoryTrait};
pub use self::simple_query::{DynOrderSimpleQueryRepository, OrderSimpleQueryRepositoryTrait};
