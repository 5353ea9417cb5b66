// ============================================================================
// RustMemoKV Library
// ============================================================================

pub mod core;
pub mod driver;
pub mod facade;
pub mod parser;
pub mod result;
pub mod storage;
pub mod transaction;

// Re-export main types for convenience
pub use crate::core::{DbError, Key, Result, Value};
pub use facade::{InMemoryDB, Step};
pub use parser::{Command, Statement};
pub use result::CommandResult;
pub use storage::{StorageEngine, TransactionalStore, ValueIndex};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_through_reexports() {
        let mut store = TransactionalStore::new();
        store.begin();
        store.set("a", "10");
        assert_eq!(store.num_equal_to("10"), 1);
        store.rollback().unwrap();
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn test_session_through_reexports() {
        let mut db = InMemoryDB::new();
        db.execute("SET a 10").unwrap();
        assert_eq!(db.execute("GET a").unwrap(), Step::Output("10".to_string()));
    }
}
