/// Split a `key=value` argument at its first `=`. The key must not be empty.
pub fn split_pair(arg: &str) -> Option<(&str, &str)> {
    arg.split_once('=').filter(|(key, _)| !key.is_empty())
}
