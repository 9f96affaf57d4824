use crate::console::dispatcher::Console;
use crate::console::error::{CommandError, ConsoleError};
use crate::console::result::CommandOutput;

pub const SEARCH_USAGE: &str = "Usage: search <className> <attribute> <value>";

impl Console {
    /// `search <Class> <attribute> <value...>`
    ///
    /// The value is every remaining word joined by single spaces and is
    /// compared as text, quotes included.
    pub(in crate::console) fn do_search(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let args: Vec<&str> = arg.split_whitespace().collect();
        if args.len() < 2 {
            return Err(CommandError::MissingArguments {
                usage: SEARCH_USAGE,
            }
            .into());
        }
        let class = Self::resolve_class(&args)?;
        let attribute = args[1];
        let value = args[2..].join(" ");

        Ok(Self::render_all(self.storage.search(class, attribute, &value)))
    }
}
