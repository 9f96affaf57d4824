pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod model;
pub mod storage;

pub use cli::CLI;
pub use config::Config;
pub use console::{CommandError, CommandOutput, Console};
pub use model::{Model, ModelClass};
pub use storage::{FileStorage, StorageError};
