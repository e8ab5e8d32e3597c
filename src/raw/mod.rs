mod arena;
mod handle;
mod node;
mod raw_rbtree;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
pub(crate) use node::{Node, predecessor, successor};
pub(crate) use raw_rbtree::{InsertResult, RawRBTree};
