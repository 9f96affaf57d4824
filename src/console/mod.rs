pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod parser;
pub mod result;

pub use dispatcher::Console;
pub use error::{CommandError, ConsoleError};
pub use result::CommandOutput;
