//! Local post stores - JSON file and in-memory.

mod file;
mod memory;

pub use file::JsonFilePostStore;
pub use memory::InMemoryPostStore;
