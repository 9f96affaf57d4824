pub mod error;
pub mod file_storage;
pub mod key;

pub use error::StorageError;
pub use file_storage::{FileStorage, DEFAULT_FILE_PATH};
