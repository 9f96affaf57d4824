use serde_json::Value;

/// Declared shape of a model attribute.
///
/// The shape only decides what an unset attribute reads as. Values coming
/// from the console are always stored as text, whatever the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Float,
    StringList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub data_type: FieldType,
}

impl Field {
    pub const fn new(name: &'static str, data_type: FieldType) -> Self {
        Self { name, data_type }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, FieldType::Float)
    }

    pub const fn string_list(name: &'static str) -> Self {
        Self::new(name, FieldType::StringList)
    }

    pub fn default_value(&self) -> Value {
        match self.data_type {
            FieldType::String => Value::String(String::new()),
            FieldType::Integer => Value::from(0),
            FieldType::Float => Value::from(0.0),
            FieldType::StringList => Value::Array(Vec::new()),
        }
    }
}
