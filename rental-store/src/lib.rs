pub mod app_config;
pub mod file_repo;
pub mod memory_repo;

pub use file_repo::FileStorage;
pub use memory_repo::MemoryStorage;
