use tracing::debug;

use super::error::{CommandError, ConsoleError};
use super::parser;
use super::result::CommandOutput;
use crate::model::{Model, ModelClass};
use crate::storage::{key, FileStorage, StorageError};

/// Routes console lines to typed operations against the object store.
pub struct Console {
    pub(super) storage: FileStorage,
}

impl Console {
    pub fn new(storage: FileStorage) -> Self {
        Console { storage }
    }

    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }

    /// Hand the store back for teardown.
    pub fn into_storage(self) -> FileStorage {
        self.storage
    }

    /// Run one line. Input mistakes come back as `CommandOutput::Error`;
    /// only storage failures are returned as `Err`.
    pub fn execute(&mut self, line: &str) -> Result<CommandOutput, StorageError> {
        let line = parser::rewrite(line);
        let (verb, arg) = parser::split_command(&line);
        if verb.is_empty() {
            return Ok(CommandOutput::Nothing);
        }
        debug!(verb, arg, "dispatching");

        let result = match verb {
            "create" => self.do_create(arg),
            "show" => self.do_show(arg),
            "destroy" => self.do_destroy(arg),
            "all" => self.do_all(arg),
            "count" => self.do_count(arg),
            "update" => self.do_update(arg),
            "batch_update" => self.do_batch_update(arg),
            "batch_delete" => self.do_batch_delete(arg),
            "batch_count" => self.do_batch_count(arg),
            "batch_show" => self.do_batch_show(arg),
            "search" => self.do_search(arg),
            "help" => self.do_help(arg),
            "quit" | "EOF" => Ok(CommandOutput::Quit),
            _ => Err(CommandError::UnknownSyntax(line.clone()).into()),
        };

        match result {
            Ok(output) => Ok(output),
            Err(ConsoleError::Command(e)) => Ok(CommandOutput::Error(e)),
            Err(ConsoleError::Storage(e)) => Err(e),
        }
    }

    /// First argument as a registered class.
    pub(super) fn resolve_class(args: &[&str]) -> Result<ModelClass, CommandError> {
        let name = args.first().ok_or(CommandError::ClassNameMissing)?;
        ModelClass::from_name(name).ok_or(CommandError::ClassNotFound)
    }

    /// Class and id arguments as the key of a live instance.
    pub(super) fn resolve_instance(&self, args: &[&str]) -> Result<String, CommandError> {
        let class = Self::resolve_class(args)?;
        let id = args.get(1).ok_or(CommandError::InstanceIdMissing)?;
        let key = key::compose(class, id);
        if self.storage.contains(&key) {
            Ok(key)
        } else {
            Err(CommandError::InstanceNotFound)
        }
    }

    pub(super) fn render_all<'a>(models: impl IntoIterator<Item = &'a Model>) -> CommandOutput {
        CommandOutput::Instances(models.into_iter().map(|model| model.to_string()).collect())
    }
}
