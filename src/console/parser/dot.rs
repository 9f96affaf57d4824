use tracing::debug;

use crate::model::ModelClass;

/// Verbs that may be written as `Class.verb(...)`.
pub const DOT_COMMANDS: [&str; 5] = ["all", "count", "show", "destroy", "update"];

fn is_dot_command(class: &str, verb: &str) -> bool {
    ModelClass::from_name(class).is_some() && DOT_COMMANDS.contains(&verb)
}

fn strip_quotes(arg: &str) -> &str {
    let arg = arg.trim();
    for quote in ['"', '\''] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            return &arg[1..arg.len() - 1];
        }
    }
    arg
}

/// `User.show("1234")` -> `show User 1234`
///
/// Only the last argument may hold spaces; `update` reads its value as the
/// rest of the line.
fn rewrite_call(line: &str) -> Option<String> {
    let head_end = line.find(|c: char| c == '(' || c.is_whitespace()).unwrap_or(line.len());
    let (class, verb) = line[..head_end].split_once('.')?;
    if !is_dot_command(class, verb) {
        return None;
    }

    let rest = &line[head_end..];
    let args: Vec<&str> = if rest.starts_with('(') {
        let inner = rest[1..].strip_suffix(')')?;
        inner
            .split(',')
            .map(strip_quotes)
            .filter(|arg| !arg.is_empty())
            .collect()
    } else {
        rest.split_whitespace().collect()
    };

    let mut rewritten = format!("{} {}", verb, class);
    for arg in args {
        rewritten.push(' ');
        rewritten.push_str(arg);
    }
    Some(rewritten)
}

/// `<word> User.count <rest>` -> `<word> count User <rest>`
fn rewrite_second_token(line: &str) -> Option<String> {
    let mut parts: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let second = parts.get(1)?;
    let mut pieces = second.split('.');
    let class = pieces.next()?;
    let verb = pieces.next()?;
    if !is_dot_command(class, verb) {
        return None;
    }
    let replacement = format!("{} {}", verb, class);
    parts[1] = replacement;
    Some(parts.join(" "))
}

/// Rewrite dot-command shorthand into the canonical `<verb> <Class> <args>`
/// form. Lines without shorthand come back unchanged.
pub fn rewrite(line: &str) -> String {
    let line = line.trim();
    match rewrite_call(line).or_else(|| rewrite_second_token(line)) {
        Some(rewritten) => {
            debug!(from = line, to = %rewritten, "rewrote dot command");
            rewritten
        }
        None => line.to_string(),
    }
}
