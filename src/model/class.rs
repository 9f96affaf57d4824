use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::field::Field;

/// Attributes every class inherits from `BaseModel`.
pub const BASE_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Name of the stored field that says which class an entry belongs to.
pub const CLASS_DISCRIMINATOR: &str = "__class__";

/// Fixed table of the classes the console knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelClass {
    BaseModel,
    User,
    Place,
    State,
    City,
    Amenity,
    Review,
}

const USER_FIELDS: &[Field] = &[
    Field::string("email"),
    Field::string("password"),
    Field::string("first_name"),
    Field::string("last_name"),
];

const PLACE_FIELDS: &[Field] = &[
    Field::string("city_id"),
    Field::string("user_id"),
    Field::string("name"),
    Field::string("description"),
    Field::integer("number_rooms"),
    Field::integer("number_bathrooms"),
    Field::integer("max_guest"),
    Field::integer("price_by_night"),
    Field::float("latitude"),
    Field::float("longitude"),
    Field::string_list("amenity_ids"),
];

const STATE_FIELDS: &[Field] = &[Field::string("name")];

const CITY_FIELDS: &[Field] = &[Field::string("state_id"), Field::string("name")];

const AMENITY_FIELDS: &[Field] = &[Field::string("name")];

const REVIEW_FIELDS: &[Field] = &[
    Field::string("place_id"),
    Field::string("user_id"),
    Field::string("text"),
];

impl ModelClass {
    pub const ALL: [ModelClass; 7] = [
        ModelClass::BaseModel,
        ModelClass::User,
        ModelClass::Place,
        ModelClass::State,
        ModelClass::City,
        ModelClass::Amenity,
        ModelClass::Review,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ModelClass::BaseModel => "BaseModel",
            ModelClass::User => "User",
            ModelClass::Place => "Place",
            ModelClass::State => "State",
            ModelClass::City => "City",
            ModelClass::Amenity => "Amenity",
            ModelClass::Review => "Review",
        }
    }

    /// Look a class up by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    /// Fields declared by the class itself, not the inherited base fields.
    pub fn own_fields(&self) -> &'static [Field] {
        match self {
            ModelClass::BaseModel => &[],
            ModelClass::User => USER_FIELDS,
            ModelClass::Place => PLACE_FIELDS,
            ModelClass::State => STATE_FIELDS,
            ModelClass::City => CITY_FIELDS,
            ModelClass::Amenity => AMENITY_FIELDS,
            ModelClass::Review => REVIEW_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.own_fields().iter().find(|field| field.name == name)
    }

    pub fn has_own_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn doc(&self) -> &'static str {
        match self {
            ModelClass::BaseModel => {
                "A base class for all hbnb models: a unique id plus creation and update timestamps"
            }
            ModelClass::User => "This class defines a user by email, password, first name and last name",
            ModelClass::Place => "A place to stay, owned by a user and located in a city",
            ModelClass::State => "State class: a named state that contains cities",
            ModelClass::City => "The city class, contains a state id and a name",
            ModelClass::Amenity => "An amenity a place can offer, identified by its name",
            ModelClass::Review => "Review class to store a user's review text for a place",
        }
    }
}

impl fmt::Display for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown class '{0}'")]
pub struct UnknownClass(pub String);

impl FromStr for ModelClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownClass(s.to_string()))
    }
}
