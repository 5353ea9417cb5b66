// ============================================================================
// Transaction Blocks
// ============================================================================
//
// Nested transactions as a stack of undo logs:
// - Change: one inverse operation
// - Block: the ordered log of one BEGIN
// - BlockStack: open blocks, innermost last
//
// ============================================================================

pub mod block;
pub mod change;

pub use block::{Block, BlockStack};
pub use change::Change;
