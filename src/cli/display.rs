use std::io::{self, Write};

use crate::console::CommandOutput;

/// Print a command's result the way the console shows it to the user.
pub fn display_output<W: Write>(out: &mut W, output: &CommandOutput) -> io::Result<()> {
    match output {
        CommandOutput::Nothing | CommandOutput::Quit => {}
        CommandOutput::Created(id) => writeln!(out, "{}", id)?,
        CommandOutput::Instance(text) => writeln!(out, "{}", text)?,
        CommandOutput::Instances(items) => writeln!(out, "[{}]", items.join(", "))?,
        CommandOutput::Count(count) => writeln!(out, "{}", count)?,
        CommandOutput::ClassCounts { errors, counts } => {
            for error in errors {
                writeln!(out, "{}", error)?;
            }
            for (class, count) in counts {
                writeln!(out, "{}: {}", class, count)?;
            }
        }
        CommandOutput::Help(lines) => {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
        CommandOutput::Error(error) => {
            writeln!(out, "{}", error)?;
            if let Some(usage) = error.usage() {
                writeln!(out, "{}", usage)?;
            }
        }
    }
    Ok(())
}
