//! Storage layer: schema types, the store trait and its backends.

mod memory;
mod pool;
mod postgres;
mod schema;
mod store;

pub use memory::MemoryStore;
pub use pool::DatabasePool;
pub use postgres::PgStore;
pub use schema::*;
pub use store::{RestaurantStore, StoreError};
