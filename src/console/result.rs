use super::error::CommandError;
use crate::model::ModelClass;

#[derive(Debug, PartialEq)]
pub enum CommandOutput {
    /// Command succeeded with nothing to print.
    Nothing,
    /// Id of a freshly created instance.
    Created(String),
    /// String form of one instance.
    Instance(String),
    /// String forms of several instances, printed as a list.
    Instances(Vec<String>),
    Count(usize),
    /// Per-class counts in the order asked for, plus the names that were rejected.
    ClassCounts {
        errors: Vec<CommandError>,
        counts: Vec<(ModelClass, usize)>,
    },
    Help(Vec<String>),
    Error(CommandError),
    Quit,
}
