// ============================================================================
// Undo Log Entries
// ============================================================================
//
// Every mutation performed inside a transaction block records the inverse
// operation needed to put the key back the way it was. Rollback replays
// these entries newest-first.
//
// ============================================================================

use crate::core::{Key, Value};

/// A single reversible change recorded in a transaction block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Rollback makes `value` the current value of `key` again.
    ///
    /// Recorded by UNSET of a present key, and by SET over an existing value.
    Set { key: Key, value: Value },

    /// Rollback removes `value` from `key`, leaving the key absent.
    ///
    /// Recorded by SET of a key that had no value.
    Unset { key: Key, value: Value },
}
