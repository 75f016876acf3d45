mod connection_pool;
mod repository;
mod sqlite_repository;

pub use connection_pool::ConnectionPool;
pub use repository::Repository;
pub use sqlite_repository::SqliteRepository;
