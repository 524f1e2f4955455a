pub mod memory;
pub mod mysql;

pub use baseline_core::{ProfileStore, StorageError};
pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
