//! Declarative resource schema handed to the host framework.
//!
//! The host validates configuration and diffs plans against this description. Attributes
//! marked `force_new` cause the host to destroy and recreate the resource when they change;
//! nothing in this crate compares attribute values itself.

use crate::constants::SCHEMA_VERSION;
use serde::Serialize;
use std::collections::BTreeMap;

/// Value type of a schema attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    /// Map with string keys and string values.
    StringMap,
}

/// A single attribute of a resource schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub description: &'static str,
    pub optional: bool,
    pub computed: bool,
    pub force_new: bool,
}

impl Attribute {
    /// A string attribute the provider sets and the user cannot configure.
    pub fn computed_string() -> Self {
        Self {
            kind: AttributeType::String,
            description: "",
            optional: false,
            computed: true,
            force_new: false,
        }
    }

    /// A user-configurable string-to-string map that may be omitted.
    pub fn optional_string_map() -> Self {
        Self {
            kind: AttributeType::StringMap,
            description: "",
            optional: true,
            computed: false,
            force_new: false,
        }
    }

    /// Marks the attribute so that a change forces the host to recreate the resource.
    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

/// Schema for one resource type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceSchema {
    pub version: u64,
    pub description: &'static str,
    pub attributes: BTreeMap<&'static str, Attribute>,
}

impl ResourceSchema {
    pub fn new(description: &'static str) -> Self {
        Self {
            version: SCHEMA_VERSION,
            description,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}

/// Schema for the `random_uuid` resource.
pub fn uuid_resource_schema() -> ResourceSchema {
    ResourceSchema::new(
        "The resource `random_uuid` generates a random uuid string that is intended to be used \
         as a unique identifier for other resources.",
    )
    .with_attribute(
        "keepers",
        Attribute::optional_string_map()
            .force_new()
            .with_description(
                "Arbitrary map of values that, when changed, will trigger recreation of the \
                 resource.",
            ),
    )
    .with_attribute(
        "result",
        Attribute::computed_string()
            .with_description("The generated uuid presented in string format."),
    )
    .with_attribute(
        "id",
        Attribute::computed_string()
            .with_description("The generated uuid presented in string format."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_schema_declares_three_attributes() {
        let schema = uuid_resource_schema();

        let names: Vec<_> = schema.attributes.keys().copied().collect();
        assert_eq!(names, vec!["id", "keepers", "result"]);
        assert_eq!(schema.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_keepers_is_optional_force_new_map() {
        let schema = uuid_resource_schema();
        let keepers = schema.attribute("keepers").unwrap();

        assert_eq!(keepers.kind, AttributeType::StringMap);
        assert!(keepers.optional);
        assert!(!keepers.computed);
        assert!(keepers.force_new);
    }

    #[test]
    fn test_result_and_id_are_computed_strings() {
        let schema = uuid_resource_schema();

        for name in ["result", "id"] {
            let attr = schema.attribute(name).unwrap();
            assert_eq!(attr.kind, AttributeType::String);
            assert!(attr.computed);
            assert!(!attr.optional);
            assert!(!attr.force_new);
        }
    }

    #[test]
    fn test_only_keepers_triggers_replacement() {
        let schema = uuid_resource_schema();
        let force_new: Vec<_> = schema
            .attributes
            .iter()
            .filter(|(_, attr)| attr.force_new)
            .map(|(name, _)| *name)
            .collect();

        assert_eq!(force_new, vec!["keepers"]);
    }

    #[test]
    fn test_schema_serializes_type_names() {
        let json = serde_json::to_value(uuid_resource_schema()).unwrap();

        assert_eq!(json["attributes"]["keepers"]["type"], "string_map");
        assert_eq!(json["attributes"]["result"]["type"], "string");
        assert_eq!(json["attributes"]["keepers"]["force_new"], true);
    }
}
