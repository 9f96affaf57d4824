pub mod dot;
pub mod pairs;

pub use dot::{rewrite, DOT_COMMANDS};
pub use pairs::split_pair;

/// Split a line into its verb and the untouched remainder.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

/// Whatever follows the first `skip` words of `line`, inner spacing kept.
pub fn remainder(line: &str, skip: usize) -> &str {
    let mut rest = line.trim();
    for _ in 0..skip {
        rest = match rest.split_once(char::is_whitespace) {
            Some((_, tail)) => tail.trim_start(),
            None => "",
        };
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("create User"), ("create", "User"));
        assert_eq!(split_command("  show   User 12 "), ("show", "User 12"));
        assert_eq!(split_command("quit"), ("quit", ""));
        assert_eq!(split_command(""), ("", ""));
    }

    #[test]
    fn test_remainder() {
        assert_eq!(remainder("User 42 name John  Smith ", 3), "John  Smith");
        assert_eq!(remainder("User 42 name", 3), "");
        assert_eq!(remainder("User 42", 3), "");
        assert_eq!(remainder("  a b", 0), "a b");
    }
}
