mod query;

pub use self::query::{DynOrderSimpleQueryService, OrderSimpleQueryServiceTrait};
