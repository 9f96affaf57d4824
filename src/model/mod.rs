mod class;
mod error;
mod field;
mod instance;
pub mod key;

pub use class::{ModelClass, UnknownClass, BASE_FIELDS, CLASS_DISCRIMINATOR};
pub use error::ModelError;
pub use field::{Field, FieldType};
pub use instance::{format_timestamp, Model, TIMESTAMP_FORMAT};
