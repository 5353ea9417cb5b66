use super::Change;

/// Undo log of one transaction, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    changes: Vec<Change>,
}

impl Block {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    pub fn record(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[cfg(test)]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Consume the block, yielding changes newest-first for replay.
    pub fn into_undo_order(self) -> impl Iterator<Item = Change> {
        self.changes.into_iter().rev()
    }
}

/// Stack of open transaction blocks, innermost last.
///
/// An empty stack means no transaction is active and every mutation is
/// permanent as soon as it is applied.
#[derive(Debug, Clone, Default)]
pub struct BlockStack {
    blocks: Vec<Block>,
}

impl BlockStack {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn push(&mut self) {
        self.blocks.push(Block::new());
    }

    pub fn pop(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    /// Record into the innermost block. Returns false when no block is open.
    pub fn record(&mut self, change: Change) -> bool {
        match self.blocks.last_mut() {
            Some(block) => {
                block.record(change);
                true
            }
            None => false,
        }
    }

    /// Drop every block at every nesting level.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[cfg(test)]
    pub fn innermost(&self) -> Option<&Block> {
        self.blocks.last()
    }
}
