pub mod engine;
pub mod memory;
pub mod value_index;

pub use engine::StorageEngine;
pub use memory::TransactionalStore;
pub use value_index::ValueIndex;
