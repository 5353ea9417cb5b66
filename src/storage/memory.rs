// ============================================================================
// Transactional Key-Value Store
// ============================================================================
//
// Owns three pieces of state that must always agree:
// - table: key -> current value
// - index: value -> number of keys currently holding it
// - stack: open transaction blocks, each an undo log
//
// Every forward mutation updates table and index together and, when a block
// is open, records its inverse in the innermost block. Rollback replays the
// inverses through the same primitives without recording them.
//
// ============================================================================

use super::{StorageEngine, ValueIndex};
use crate::core::{DbError, Key, Result, Value};
use crate::transaction::{BlockStack, Change};
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct TransactionalStore {
    table: HashMap<Key, Value>,
    index: ValueIndex,
    stack: BlockStack,
}

impl TransactionalStore {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            index: ValueIndex::new(),
            stack: BlockStack::new(),
        }
    }

    /// Number of open transaction blocks
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn in_transaction(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of keys that currently have a value
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn index(&self) -> &ValueIndex {
        &self.index
    }

    /// Recount the value index from the table and compare
    pub fn verify_index(&self) -> bool {
        let mut expected = ValueIndex::new();
        for value in self.table.values() {
            expected.increment(value);
        }
        expected == self.index
    }

    /// Write `value` and keep the index in step. Returns the displaced value.
    fn assign(&mut self, key: Key, value: Value) -> Option<Value> {
        self.index.increment(&value);
        let previous = self.table.insert(key, value);
        if let Some(old) = &previous {
            self.index.decrement(old);
        }
        previous
    }

    /// Drop `key` and keep the index in step. Returns the removed value.
    fn remove(&mut self, key: &str) -> Option<Value> {
        let previous = self.table.remove(key)?;
        self.index.decrement(&previous);
        Some(previous)
    }
}

impl StorageEngine for TransactionalStore {
    /// Assign `value` to `key`
    fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        if !self.in_transaction() {
            self.assign(key, value);
            return;
        }

        let change = match self.assign(key.clone(), value.clone()) {
            Some(previous) => Change::Set { key, value: previous },
            None => Change::Unset { key, value },
        };
        self.stack.record(change);
    }

    /// Remove `key`. Absent keys are left alone and nothing is recorded.
    fn unset(&mut self, key: &str) {
        let Some(previous) = self.remove(key) else {
            return;
        };

        if self.in_transaction() {
            self.stack.record(Change::Set {
                key: key.to_string(),
                value: previous,
            });
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(String::as_str)
    }

    /// Number of keys whose current value equals `value`
    fn num_equal_to(&self, value: &str) -> usize {
        self.index.count(value)
    }

    /// Open a new (possibly nested) transaction block
    fn begin(&mut self) {
        self.stack.push();
        debug!("begin: depth {}", self.stack.depth());
    }

    /// Undo every change recorded in the innermost block
    ///
    /// # Errors
    ///
    /// [`DbError::NoTransaction`] when no block is open; state is untouched.
    fn rollback(&mut self) -> Result<()> {
        let block = self.stack.pop().ok_or(DbError::NoTransaction)?;
        let replayed = block.len();

        for change in block.into_undo_order() {
            match change {
                Change::Set { key, value } => {
                    self.assign(key, value);
                }
                Change::Unset { key, value } => {
                    let removed = self.remove(&key);
                    debug_assert_eq!(removed.as_deref(), Some(value.as_str()));
                }
            }
        }

        debug!(
            "rollback: replayed {} change(s), depth {}",
            replayed,
            self.stack.depth()
        );
        debug_assert!(self.verify_index(), "value index out of sync after rollback");
        Ok(())
    }

    /// Make every buffered change permanent and close all blocks
    fn commit(&mut self) {
        let depth = self.stack.depth();
        self.stack.clear();
        debug!("commit: closed {} block(s)", depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Command;
    use crate::result::CommandResult;

    #[test]
    fn test_set_and_get() {
        let mut store = TransactionalStore::new();
        store.set("a", "10");
        assert_eq!(store.get("a"), Some("10"));
        assert_eq!(store.get("b"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_moves_count() {
        let mut store = TransactionalStore::new();
        store.set("a", "10");
        store.set("b", "10");
        assert_eq!(store.num_equal_to("10"), 2);

        store.set("b", "30");
        assert_eq!(store.num_equal_to("10"), 1);
        assert_eq!(store.num_equal_to("30"), 1);
        assert!(store.verify_index());
    }

    #[test]
    fn test_set_same_value_keeps_count() {
        let mut store = TransactionalStore::new();
        store.set("a", "10");
        store.set("a", "10");
        assert_eq!(store.num_equal_to("10"), 1);
        assert!(store.verify_index());
    }

    #[test]
    fn test_unset_absent_key_is_noop() {
        let mut store = TransactionalStore::new();
        store.begin();
        store.unset("z");

        assert_eq!(store.get("z"), None);
        assert!(store.index().is_empty());
        assert_eq!(store.stack.innermost().map(|b| b.len()), Some(0));
    }

    #[test]
    fn test_unset_clears_value_and_index() {
        let mut store = TransactionalStore::new();
        store.set("a", "10");
        store.unset("a");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.num_equal_to("10"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_changes_recorded_only_inside_block() {
        let mut store = TransactionalStore::new();
        store.set("a", "1");
        assert!(store.stack.innermost().is_none());

        store.begin();
        store.set("a", "2");
        store.set("b", "3");
        store.unset("a");

        let block = store.stack.innermost().unwrap();
        assert_eq!(
            block.changes(),
            &[
                Change::Set { key: "a".into(), value: "1".into() },
                Change::Unset { key: "b".into(), value: "3".into() },
                Change::Set { key: "a".into(), value: "2".into() },
            ]
        );
    }

    #[test]
    fn test_set_and_unset_share_transaction_check() {
        let mut store = TransactionalStore::new();
        store.set("a", "1");
        store.unset("a");
        assert!(store.stack.innermost().is_none());

        store.begin();
        store.set("a", "1");
        store.unset("a");
        assert_eq!(store.stack.innermost().map(|b| b.len()), Some(2));

        store.commit();
        store.set("b", "2");
        store.unset("b");
        assert!(store.stack.innermost().is_none());
        assert!(store.verify_index());
    }

    #[test]
    fn test_rollback_without_transaction() {
        let mut store = TransactionalStore::new();
        store.set("a", "10");
        assert_eq!(store.rollback(), Err(DbError::NoTransaction));
        assert_eq!(store.get("a"), Some("10"));
    }

    #[test]
    fn test_rollback_removes_new_key() {
        let mut store = TransactionalStore::new();
        store.begin();
        store.set("a", "10");
        store.rollback().unwrap();

        assert_eq!(store.get("a"), None);
        assert_eq!(store.num_equal_to("10"), 0);
        assert!(!store.in_transaction());
    }

    #[test]
    fn test_rollback_restores_overwritten_then_unset_key() {
        let mut store = TransactionalStore::new();
        store.set("a", "10");

        store.begin();
        store.set("a", "20");
        store.unset("a");
        store.rollback().unwrap();

        assert_eq!(store.get("a"), Some("10"));
        assert_eq!(store.num_equal_to("10"), 1);
        assert_eq!(store.num_equal_to("20"), 0);
        assert!(store.verify_index());
    }

    #[test]
    fn test_commit_closes_every_block() {
        let mut store = TransactionalStore::new();
        store.begin();
        store.set("a", "1");
        store.begin();
        store.set("b", "2");
        assert_eq!(store.depth(), 2);

        store.commit();
        assert_eq!(store.depth(), 0);
        assert_eq!(store.rollback(), Err(DbError::NoTransaction));
        assert_eq!(store.get("a"), Some("1"));
        assert_eq!(store.get("b"), Some("2"));
    }

    #[test]
    fn test_execute_results() {
        let mut store = TransactionalStore::new();
        let set = Command::Set { key: "a".into(), value: "10".into() };
        assert_eq!(store.execute(set), CommandResult::Empty);
        assert_eq!(
            store.execute(Command::Get { key: "a".into() }),
            CommandResult::Value(Some("10".into()))
        );
        assert_eq!(
            store.execute(Command::NumEqualTo { value: "10".into() }),
            CommandResult::Count(1)
        );
        assert_eq!(store.execute(Command::Rollback), CommandResult::NoTransaction);
        assert_eq!(store.execute(Command::Begin), CommandResult::Empty);
        assert_eq!(store.execute(Command::Rollback), CommandResult::Empty);
        assert_eq!(store.execute(Command::Commit), CommandResult::Empty);
    }
}
