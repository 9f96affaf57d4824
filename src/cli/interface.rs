use std::borrow::Cow;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::display::display_output;
use crate::console::{CommandOutput, Console};

pub const PROMPT: &str = "(hbnb) ";

pub struct CLI {
    pub console: Console,
    pub interactive: bool,
}

impl CLI {
    /// Interactive when stdin is a terminal; silent batch mode otherwise.
    pub fn new(console: Console) -> Self {
        CLI {
            console,
            interactive: io::stdin().is_terminal(),
        }
    }

    pub fn with_mode(console: Console, interactive: bool) -> Self {
        CLI {
            console,
            interactive,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Read-eval-print until `quit` or end of input. Bad input is reported
    /// and the loop carries on; storage failures end it with an error.
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut buffer = Vec::new();
        loop {
            if self.interactive {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }

            buffer.clear();
            let read = input
                .read_until(b'\n', &mut buffer)
                .context("failed to read input")?;
            if read == 0 {
                if self.interactive {
                    writeln!(output)?;
                }
                info!("end of input");
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            if let Cow::Owned(_) = line {
                warn!("input line was not valid UTF-8, replaced invalid bytes");
            }

            let result = self
                .console
                .execute(&line)
                .context("storage failure, stopping")?;
            display_output(&mut output, &result)?;
            if result == CommandOutput::Quit {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Flush anything unsaved and release the store.
    pub fn shutdown(self) -> Result<()> {
        self.console
            .into_storage()
            .close()
            .context("failed to save objects on shutdown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;
    use tempfile::TempDir;

    fn run_script(dir: &TempDir, interactive: bool, script: &str) -> String {
        let storage = FileStorage::open(dir.path().join("file.json")).unwrap();
        let mut cli = CLI::with_mode(Console::new(storage), interactive);
        let mut output = Vec::new();
        cli.run_with(script.as_bytes(), &mut output).unwrap();
        cli.shutdown().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_batch_mode_is_silent() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_script(&temp_dir, false, "\ncount User\nquit\ncount User\n");
        assert_eq!(output, "0\n");
    }

    #[test]
    fn test_interactive_prompts() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_script(&temp_dir, true, "count User\n");
        assert_eq!(output, "(hbnb) 0\n(hbnb) \n");
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_script(&temp_dir, false, "show Foo 123\nfly\ncount BaseModel\nEOF\n");
        assert_eq!(
            output,
            "** class doesn't exist **\n*** Unknown syntax: fly\n0\n"
        );
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_the_loop() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path().join("file.json")).unwrap();
        let mut cli = CLI::with_mode(Console::new(storage), false);
        let mut output = Vec::new();
        cli.run_with(&b"show \xff\xfe 1\n\xff\ncount User\n"[..], &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("0\n"), "{}", output);
    }

    #[test]
    fn test_state_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let id = run_script(&temp_dir, false, "create Place\n");
        let output = run_script(&temp_dir, false, &format!("show Place {}", id.trim()));
        assert!(output.starts_with(&format!("[Place] ({})", id.trim())));
    }
}
