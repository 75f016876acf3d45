mod memory_cache;
mod open_request_cache;

pub use memory_cache::MemoryCacheService;
pub use open_request_cache::InMemoryOpenRequestCache;
