use tracing::info;

use crate::console::dispatcher::Console;
use crate::console::error::{CommandError, ConsoleError};
use crate::console::parser::split_pair;
use crate::console::result::CommandOutput;
use crate::model::ModelClass;
use crate::storage::key;

pub const BATCH_UPDATE_USAGE: &str = "Usage: batch_update <className> [<id>] <key=value> <key=value> ...";

impl Console {
    /// `batch_update <Class> [<id>] key=value...`
    ///
    /// Every pair is checked against the class's own fields before anything
    /// is written. Without an id, every instance of the class is updated.
    pub(in crate::console) fn do_batch_update(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        if args.len() < 2 {
            return Err(CommandError::MissingArguments {
                usage: BATCH_UPDATE_USAGE,
            }
            .into());
        }
        let class = Self::resolve_class(&args)?;

        let (target, pairs) = if args[1].contains('=') {
            (None, &args[1..])
        } else {
            (Some(args[1]), &args[2..])
        };
        if pairs.is_empty() {
            return Err(CommandError::MissingArguments {
                usage: BATCH_UPDATE_USAGE,
            }
            .into());
        }

        let mut updates = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let (attribute, value) = split_pair(pair).ok_or(CommandError::InvalidArgumentFormat {
                usage: BATCH_UPDATE_USAGE,
            })?;
            if !class.has_own_field(attribute) {
                return Err(CommandError::UnknownAttribute {
                    class: class.name().to_string(),
                    attribute: attribute.to_string(),
                }
                .into());
            }
            updates.push((attribute, value));
        }

        let keys: Vec<String> = match target {
            Some(id) => {
                let key = key::compose(class, id);
                if !self.storage.contains(&key) {
                    return Err(CommandError::InstanceNotFound.into());
                }
                vec![key]
            }
            None => self.storage.all_of(class).iter().map(|model| model.key()).collect(),
        };

        for key in &keys {
            if let Some(model) = self.storage.get_mut(key) {
                for (attribute, value) in &updates {
                    model.set_attr(attribute, value);
                }
                model.touch();
            }
            self.storage.save()?;
        }

        info!(class = class.name(), instances = keys.len(), "batch updated");
        Ok(CommandOutput::Nothing)
    }

    /// `batch_delete <Class>`
    pub(in crate::console) fn do_batch_delete(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        let class = Self::resolve_class(&args)?;

        let keys: Vec<String> = self.storage.all_of(class).iter().map(|model| model.key()).collect();
        let objects = self.storage.all_mut();
        for key in &keys {
            objects.remove(key);
        }
        self.storage.save()?;

        info!(class = class.name(), removed = keys.len(), "batch deleted");
        Ok(CommandOutput::Nothing)
    }

    /// `batch_count <Class>...`
    pub(in crate::console) fn do_batch_count(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let names: Vec<&str> = arg.split_whitespace().collect();
        if names.is_empty() {
            return Err(CommandError::ClassNamesMissing.into());
        }

        let mut errors = Vec::new();
        let mut counts: Vec<(ModelClass, usize)> = Vec::new();
        for name in names {
            match ModelClass::from_name(name) {
                Some(class) => {
                    if !counts.iter().any(|(counted, _)| *counted == class) {
                        counts.push((class, self.storage.count_of(class)));
                    }
                }
                None => errors.push(CommandError::NamedClassNotFound(name.to_string())),
            }
        }

        Ok(CommandOutput::ClassCounts { errors, counts })
    }

    /// `batch_show <Class>`
    pub(in crate::console) fn do_batch_show(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        let class = Self::resolve_class(&args)?;
        Ok(Self::render_all(self.storage.all_of(class)))
    }
}
