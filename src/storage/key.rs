pub use crate::model::key::compose;

/// Split a composite key at its first dot into class name and id.
pub fn split(key: &str) -> Option<(&str, &str)> {
    key.split_once('.')
}

/// Class-name prefix of a key, or the whole key when it has no dot.
pub fn class_name(key: &str) -> &str {
    split(key).map_or(key, |(class, _)| class)
}
