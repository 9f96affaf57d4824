use crate::console::dispatcher::Console;
use crate::console::error::ConsoleError;
use crate::console::result::CommandOutput;
use crate::model::ModelClass;

use super::batch::BATCH_UPDATE_USAGE;
use super::search::SEARCH_USAGE;

/// Command name, description, usage.
const HELP_TOPICS: &[(&str, &str, &str)] = &[
    ("EOF", "Exit the program at end of input", "Usage: EOF"),
    ("all", "Show all objects or objects of a specific class", "Usage: all [<className>]"),
    ("batch_count", "Count the number of instances of multiple classes", "Usage: batch_count <className1> <className2> ..."),
    ("batch_delete", "Delete every instance of a class", "Usage: batch_delete <className>"),
    ("batch_show", "Show every instance of a class", "Usage: batch_show <className>"),
    ("batch_update", "Set the same attributes on every instance of a class", BATCH_UPDATE_USAGE),
    ("count", "Count the number of instances of a class", "Usage: count <className>"),
    ("create", "Create a new object of any class and print its id", "Usage: create <className>"),
    ("destroy", "Destroy an individual instance of a class", "Usage: destroy <className> <objectId>"),
    ("help", "Show help information for a specific command or class", "Usage: help [<command> | <className>]"),
    ("quit", "Exit the program", "Usage: quit"),
    ("search", "Search for objects based on attribute values", SEARCH_USAGE),
    ("show", "Show an individual instance of a class", "Usage: show <className> <objectId>"),
    ("update", "Update an object with new information", "Usage: update <className> <objectId> <attribute> <value>"),
];

fn topic_lines(topic: &str) -> Vec<String> {
    if let Some(class) = ModelClass::from_name(topic) {
        return vec![class.doc().to_string()];
    }
    match HELP_TOPICS.iter().find(|(name, _, _)| *name == topic) {
        Some((_, description, usage)) => vec![description.to_string(), usage.to_string()],
        None => vec![format!("No help available for {}", topic)],
    }
}

fn overview_lines() -> Vec<String> {
    let header = "Documented commands (type help <topic>):";
    let names: Vec<&str> = HELP_TOPICS.iter().map(|(name, _, _)| *name).collect();
    vec![
        String::new(),
        header.to_string(),
        "=".repeat(header.len()),
        names.join("  "),
        String::new(),
    ]
}

impl Console {
    /// `help [<topic>]`
    pub(in crate::console) fn do_help(&mut self, arg: &str) -> Result<CommandOutput, ConsoleError> {
        let lines = match arg.split_whitespace().next() {
            Some(topic) => topic_lines(topic),
            None => overview_lines(),
        };
        Ok(CommandOutput::Help(lines))
    }
}
