use tracing::info;

use crate::console::dispatcher::Console;
use crate::console::error::{CommandError, ConsoleError};
use crate::console::parser;
use crate::console::result::CommandOutput;
use crate::model::{Model, ModelClass};

impl Console {
    /// `create <Class>`
    pub(in crate::console) fn do_create(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        let class = Self::resolve_class(&args)?;

        let model = Model::new(class);
        let id = model.id().to_string();
        self.storage.persist(model)?;

        info!(class = class.name(), id = %id, "created instance");
        Ok(CommandOutput::Created(id))
    }

    /// `show <Class> <id>`
    pub(in crate::console) fn do_show(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        let key = self.resolve_instance(&args)?;
        let model = self
            .storage
            .get(&key)
            .ok_or(CommandError::InstanceNotFound)?;
        Ok(CommandOutput::Instance(model.to_string()))
    }

    /// `destroy <Class> <id>`
    pub(in crate::console) fn do_destroy(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        let key = self.resolve_instance(&args)?;

        self.storage.all_mut().remove(&key);
        self.storage.save()?;

        info!(key = %key, "destroyed instance");
        Ok(CommandOutput::Nothing)
    }

    /// `all [<Class>]`
    pub(in crate::console) fn do_all(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        match arg.split_whitespace().next() {
            None => Ok(Self::render_all(self.storage.all().values())),
            Some(name) => {
                let class = ModelClass::from_name(name).ok_or(CommandError::ClassNotFound)?;
                Ok(Self::render_all(self.storage.all_of(class)))
            }
        }
    }

    /// `count <Class>`
    pub(in crate::console) fn do_count(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let class = arg
            .split_whitespace()
            .next()
            .and_then(ModelClass::from_name)
            .ok_or(CommandError::ClassNotFound)?;
        Ok(CommandOutput::Count(self.storage.count_of(class)))
    }

    /// `update <Class> <id> <attribute> <value>`
    ///
    /// The value is everything after the attribute name, stored as raw text
    /// regardless of the attribute's declared type.
    pub(in crate::console) fn do_update(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        let key = self.resolve_instance(&args)?;
        let attribute = args.get(2).ok_or(CommandError::AttributeNameMissing)?;
        let value = parser::remainder(arg, 3);
        if value.is_empty() {
            return Err(CommandError::ValueMissing.into());
        }

        if Model::is_read_only(attribute) {
            return Err(CommandError::ReadOnlyAttribute(attribute.to_string()).into());
        }

        let model = self
            .storage
            .get_mut(&key)
            .ok_or(CommandError::InstanceNotFound)?;
        model.set_attr(attribute, value);
        model.touch();
        self.storage.save()?;

        info!(key = %key, attribute = *attribute, "updated instance");
        Ok(CommandOutput::Nothing)
    }
}
