pub mod chunk;
pub mod deque;
pub(crate) mod directory;
pub mod pool;
