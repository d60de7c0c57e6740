pub mod heap;
pub use heap::{HeapCapability, HeapError, HeapPQ, OrderedBy};
