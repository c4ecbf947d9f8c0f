pub mod connection;
pub mod memory;
pub mod operations;
pub mod postgres;
pub mod store;

pub use memory::InMemoryPostStore;
pub use postgres::PgPostStore;
pub use store::{ PostStore, StoreError };
