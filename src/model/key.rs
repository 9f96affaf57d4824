use super::ModelClass;

/// Build the composite key `<ClassName>.<id>`.
pub fn compose(class: ModelClass, id: &str) -> String {
    format!("{}.{}", class.name(), id)
}
