use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDateTime, SubsecRound, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::class::{ModelClass, BASE_FIELDS, CLASS_DISCRIMINATOR};
use super::error::ModelError;
use super::key;

/// ISO-8601 layout used for `created_at` / `updated_at`, microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn now() -> NaiveDateTime {
    // Stored timestamps only keep microseconds, so drop the rest up front
    Utc::now().naive_utc().trunc_subsecs(6)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn parse_timestamp(name: &'static str, value: &Value) -> Result<NaiveDateTime, ModelError> {
    let text = value.as_str().ok_or(ModelError::NotAString { name })?;
    NaiveDateTime::parse_from_str(text, TIMESTAMP_PARSE_FORMAT).map_err(|_| {
        ModelError::InvalidTimestamp {
            name,
            value: text.to_string(),
        }
    })
}

/// A live record of one of the model classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    class: ModelClass,
    id: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    attributes: BTreeMap<String, Value>,
}

impl Model {
    /// Fresh instance with a random id and both timestamps set to now.
    pub fn new(class: ModelClass) -> Self {
        let now = now();
        Self {
            class,
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            attributes: BTreeMap::new(),
        }
    }

    /// Rebuild an instance from its exported dictionary, keeping the stored
    /// id and timestamps. Keys the class does not declare are kept as-is.
    pub fn from_dict(class: ModelClass, dict: &Value) -> Result<Self, ModelError> {
        let map = dict
            .as_object()
            .ok_or_else(|| ModelError::NotAnObject(dict.to_string()))?;

        if let Some(found) = map.get(CLASS_DISCRIMINATOR) {
            let found = found.as_str().ok_or(ModelError::NotAString {
                name: CLASS_DISCRIMINATOR,
            })?;
            if found != class.name() {
                return Err(ModelError::ClassMismatch {
                    expected: class.name().to_string(),
                    found: found.to_string(),
                });
            }
        }

        let id = map
            .get("id")
            .ok_or(ModelError::MissingAttribute("id"))?
            .as_str()
            .ok_or(ModelError::NotAString { name: "id" })?
            .to_string();
        let created_at = parse_timestamp(
            "created_at",
            map.get("created_at")
                .ok_or(ModelError::MissingAttribute("created_at"))?,
        )?;
        let updated_at = parse_timestamp(
            "updated_at",
            map.get("updated_at")
                .ok_or(ModelError::MissingAttribute("updated_at"))?,
        )?;

        let attributes = map
            .iter()
            .filter(|(key, _)| !BASE_FIELDS.contains(&key.as_str()) && *key != CLASS_DISCRIMINATOR)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            class,
            id,
            created_at,
            updated_at,
            attributes,
        })
    }

    /// Rebuild an instance, picking the class from the `__class__` field.
    pub fn restore(dict: &Value) -> Result<Self, ModelError> {
        let class = dict
            .get(CLASS_DISCRIMINATOR)
            .ok_or(ModelError::MissingAttribute(CLASS_DISCRIMINATOR))?
            .as_str()
            .ok_or(ModelError::NotAString {
                name: CLASS_DISCRIMINATOR,
            })?
            .parse::<ModelClass>()?;
        Self::from_dict(class, dict)
    }

    pub fn class(&self) -> ModelClass {
        self.class
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Composite store key, `<ClassName>.<id>`.
    pub fn key(&self) -> String {
        key::compose(self.class, &self.id)
    }

    /// Refresh the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = now();
    }

    /// Set an attribute to raw text. Base fields are read-only and are
    /// rejected with `false`.
    pub fn set_attr(&mut self, name: &str, value: &str) -> bool {
        if Self::is_read_only(name) {
            return false;
        }
        self.attributes
            .insert(name.to_string(), Value::String(value.to_string()));
        true
    }

    pub fn is_read_only(name: &str) -> bool {
        BASE_FIELDS.contains(&name) || name == CLASS_DISCRIMINATOR
    }

    /// Attribute value, falling back to the declared default of the class.
    pub fn get_attr(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::String(self.id.clone())),
            "created_at" => Some(Value::String(format_timestamp(&self.created_at))),
            "updated_at" => Some(Value::String(format_timestamp(&self.updated_at))),
            _ => self
                .attributes
                .get(name)
                .cloned()
                .or_else(|| self.class.field(name).map(|field| field.default_value())),
        }
    }

    /// True when the named attribute holds text equal to `value`.
    /// Timestamps and non-text values never match.
    pub fn attr_equals(&self, name: &str, value: &str) -> bool {
        if name == "created_at" || name == "updated_at" {
            return false;
        }
        matches!(self.get_attr(name), Some(Value::String(ref text)) if text == value)
    }

    fn attribute_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        map.insert(
            "created_at".to_string(),
            Value::String(format_timestamp(&self.created_at)),
        );
        map.insert(
            "updated_at".to_string(),
            Value::String(format_timestamp(&self.updated_at)),
        );
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    /// Exported dictionary: every attribute plus the `__class__` discriminator.
    pub fn to_dict(&self) -> Value {
        let mut map = self.attribute_map();
        map.insert(
            CLASS_DISCRIMINATOR.to_string(),
            Value::String(self.class.name().to_string()),
        );
        Value::Object(map)
    }
}

/// Serializes as the exported dictionary.
impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {}",
            self.class,
            self.id,
            Value::Object(self.attribute_map())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_instance() {
        let model = Model::new(ModelClass::User);
        assert_eq!(model.class(), ModelClass::User);
        assert!(Uuid::parse_str(model.id()).is_ok());
        assert_eq!(model.created_at(), model.updated_at());
        assert_eq!(model.key(), format!("User.{}", model.id()));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Model::new(ModelClass::BaseModel);
        let b = Model::new(ModelClass::BaseModel);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_to_dict_shape() {
        let model = Model::new(ModelClass::City);
        let dict = model.to_dict();
        assert_eq!(dict["__class__"], "City");
        assert_eq!(dict["id"], model.id());
        assert!(dict["created_at"].is_string());
        assert!(dict["updated_at"].is_string());
        assert!(NaiveDateTime::parse_from_str(
            dict["created_at"].as_str().unwrap(),
            TIMESTAMP_FORMAT
        )
        .is_ok());
    }

    #[test]
    fn test_dict_round_trip() {
        let mut model = Model::new(ModelClass::User);
        model.set_attr("email", "a@b.c");
        model.set_attr("nickname", "al");
        let restored = Model::from_dict(ModelClass::User, &model.to_dict()).unwrap();
        assert_eq!(restored, model);
        assert_eq!(restored.to_dict(), model.to_dict());
    }

    #[test]
    fn test_restore_uses_discriminator() {
        let model = Model::new(ModelClass::Review);
        let restored = Model::restore(&model.to_dict()).unwrap();
        assert_eq!(restored.class(), ModelClass::Review);
        assert_eq!(restored.id(), model.id());
    }

    #[test]
    fn test_from_dict_rejects_bad_input() {
        let err = Model::from_dict(ModelClass::BaseModel, &json!({"invalid_key": "value"}));
        assert_eq!(err, Err(ModelError::MissingAttribute("id")));

        let err = Model::from_dict(ModelClass::BaseModel, &json!([1, 2]));
        assert!(matches!(err, Err(ModelError::NotAnObject(_))));

        let err = Model::from_dict(
            ModelClass::BaseModel,
            &json!({"id": "x", "created_at": "yesterday", "updated_at": "today"}),
        );
        assert!(matches!(err, Err(ModelError::InvalidTimestamp { name: "created_at", .. })));

        let mut dict = Model::new(ModelClass::User).to_dict();
        dict["__class__"] = json!("Place");
        let err = Model::from_dict(ModelClass::User, &dict);
        assert!(matches!(err, Err(ModelError::ClassMismatch { .. })));

        dict["__class__"] = json!("Spaceship");
        assert!(matches!(Model::restore(&dict), Err(ModelError::UnknownClass(_))));
    }

    #[test]
    fn test_accepts_timestamps_without_fraction() {
        let dict = json!({
            "id": "abc",
            "created_at": "2017-09-28T21:05:54",
            "updated_at": "2017-09-28T21:05:54.119427",
            "__class__": "State",
            "name": "California"
        });
        let model = Model::restore(&dict).unwrap();
        assert_eq!(model.get_attr("name"), Some(json!("California")));
        assert_eq!(model.to_dict()["created_at"], "2017-09-28T21:05:54.000000");
    }

    #[test]
    fn test_set_attr_stores_text() {
        let mut place = Model::new(ModelClass::Place);
        assert_eq!(place.get_attr("number_rooms"), Some(json!(0)));
        assert!(place.set_attr("number_rooms", "4"));
        assert_eq!(place.get_attr("number_rooms"), Some(json!("4")));
        assert!(!place.set_attr("id", "other"));
        assert!(!place.set_attr("__class__", "User"));
        assert_eq!(place.get_attr("unknown"), None);
    }

    #[test]
    fn test_attr_equals() {
        let mut user = Model::new(ModelClass::User);
        assert!(user.attr_equals("email", ""));
        user.set_attr("email", "test@example.com");
        assert!(user.attr_equals("email", "test@example.com"));
        assert!(!user.attr_equals("email", "other@example.com"));
        assert!(user.attr_equals("id", user.id()));
        let created = format_timestamp(&user.created_at());
        assert!(!user.attr_equals("created_at", &created));

        let place = Model::new(ModelClass::Place);
        assert!(!place.attr_equals("max_guest", "0"));
    }

    #[test]
    fn test_serializes_as_dict() {
        let model = Model::new(ModelClass::Place);
        assert_eq!(serde_json::to_value(&model).unwrap(), model.to_dict());
    }

    #[test]
    fn test_display() {
        let mut state = Model::new(ModelClass::State);
        state.set_attr("name", "Nevada");
        let text = state.to_string();
        assert!(text.starts_with(&format!("[State] ({}) {{", state.id())));
        assert!(text.contains("\"name\":\"Nevada\""));
        assert!(!text.contains("__class__"));
    }

    #[test]
    fn test_touch_keeps_created_at() {
        let mut model = Model::new(ModelClass::Amenity);
        let created = model.created_at();
        std::thread::sleep(std::time::Duration::from_millis(2));
        model.touch();
        assert_eq!(model.created_at(), created);
        assert!(model.updated_at() > created);
    }
}
