pub mod config;
pub mod storage;

pub use config::AppConfig;
pub use storage::StorageError;
#[cfg(feature = "native")]
pub use storage::DataDirectory;
