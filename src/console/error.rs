use thiserror::Error;

use crate::storage::StorageError;

/// Mistakes in user input. Each one is reported and the loop carries on.
///
/// `Display` is exactly the line printed back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("** class name missing **")]
    ClassNameMissing,

    #[error("** class names missing **")]
    ClassNamesMissing,

    #[error("** class doesn't exist **")]
    ClassNotFound,

    #[error("** {0} class doesn't exist **")]
    NamedClassNotFound(String),

    #[error("** instance id missing **")]
    InstanceIdMissing,

    #[error("** no instance found **")]
    InstanceNotFound,

    #[error("** attribute name missing **")]
    AttributeNameMissing,

    #[error("** value missing **")]
    ValueMissing,

    #[error("** attribute '{0}' can't be updated **")]
    ReadOnlyAttribute(String),

    #[error("** missing arguments **")]
    MissingArguments { usage: &'static str },

    #[error("** invalid argument format **")]
    InvalidArgumentFormat { usage: &'static str },

    #[error("** {class} doesn't have attribute '{attribute}' **")]
    UnknownAttribute { class: String, attribute: String },

    #[error("*** Unknown syntax: {0}")]
    UnknownSyntax(String),
}

impl CommandError {
    /// Usage line printed after the error, for the errors that carry one.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            CommandError::MissingArguments { usage }
            | CommandError::InvalidArgumentFormat { usage } => Some(*usage),
            _ => None,
        }
    }
}

/// Anything a command handler can fail with.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
