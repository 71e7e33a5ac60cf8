//! Repository Layer
//!
//! Data access abstractions and implementations.

mod id_allocator;
mod memory;
mod todo_store;
mod traits;

#[cfg(test)]
mod tests;

pub use id_allocator::IdAllocator;
pub use memory::MemoryStorage;
pub use todo_store::TodoStore;
pub use traits::KeyValueStorage;
