use crate::core::Value;
use std::collections::HashMap;

/// Reverse index: value -> number of keys whose current value equals it.
///
/// Only positive counts are stored. A value whose count drops to zero is
/// removed, so two indexes over the same table compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueIndex {
    counts: HashMap<Value, usize>,
}

impl ValueIndex {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    pub fn increment(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    /// Caller must hold a live reference to `value`; decrementing an absent
    /// value is a bookkeeping bug.
    pub fn decrement(&mut self, value: &str) {
        let Some(count) = self.counts.get_mut(value) else {
            debug_assert!(false, "decrement of unindexed value '{}'", value);
            return;
        };

        *count -= 1;
        if *count == 0 {
            self.counts.remove(value);
        }
    }

    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
