pub mod capability;
pub mod engine;
pub mod error;
pub mod queue;
pub use capability::{HeapCapability, OrderedBy};
pub use engine::{fix, init, is_heap, pop, push, remove};
pub use error::HeapError;
pub use queue::HeapPQ;
