//! Attribute schema of a data source.
//!
//! Attribute names are snake_case; the name a value carries inside the
//! Kubernetes object is kept in [`Attribute::wire_name`] whenever it differs.
mod convert;
mod validate;

pub use convert::{attribute_name, attributes_for};
pub use validate::{Diagnostic, Diagnostics};

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type Attributes = BTreeMap<String, Attribute>;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Schema {
    pub description: String,
    pub attributes: Attributes,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub type_: AttributeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wire_name: Option<String>,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", content = "element", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    Int64,
    Float64,
    /// Kubernetes `IntOrString`: an integer or a string, passed through as given.
    IntOrString,
    /// Any JSON value, passed through untouched.
    Dynamic,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(Attributes),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum Validator {
    /// The string must be one of the values.
    OneOf(Vec<String>),
    /// Exactly one of the named attributes of the object must be set.
    ExactlyOneOf(Vec<String>),
    /// The integer must fit the bounds of the target type.
    IntRange { min: i64, max: i64 },
    DnsSubdomain,
    DnsLabel,
    Labels,
    Annotations,
}

impl Attribute {
    fn new(type_: AttributeType) -> Self {
        Attribute {
            type_,
            description: None,
            wire_name: None,
            required: false,
            optional: false,
            computed: false,
            validators: Vec::new(),
        }
    }

    pub fn required(type_: AttributeType) -> Self {
        Attribute { required: true, ..Attribute::new(type_) }
    }

    pub fn optional(type_: AttributeType) -> Self {
        Attribute { optional: true, ..Attribute::new(type_) }
    }

    pub fn computed(type_: AttributeType) -> Self {
        Attribute { computed: true, ..Attribute::new(type_) }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Whether a practitioner may set this attribute.
    pub fn is_configurable(&self) -> bool {
        self.required || self.optional
    }
}

impl AttributeType {
    /// The attributes of an object, looking through lists and maps of objects.
    pub fn nested(&self) -> Option<&Attributes> {
        match self {
            AttributeType::Object(attributes) => Some(attributes),
            AttributeType::List(element) | AttributeType::Map(element) => element.nested(),
            _ => None,
        }
    }
}

impl Schema {
    /// Look up an attribute by its dotted path, e.g. `spec.source.ref.name`.
    pub fn attribute(&self, path: &str) -> Option<&Attribute> {
        let mut attributes = &self.attributes;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let attribute = attributes.get(segment)?;
            if segments.peek().is_none() {
                return Some(attribute);
            }
            attributes = attribute.type_.nested()?;
        }
        None
    }

    /// Translate a configuration into the object the Kubernetes API expects:
    /// attribute names become wire names, nulls and computed attributes are dropped.
    pub fn to_wire(&self, config: &Value) -> Value {
        match config {
            Value::Object(values) => Value::Object(object_to_wire(&self.attributes, values)),
            other => other.clone(),
        }
    }
}

fn object_to_wire(attributes: &Attributes, values: &Map<String, Value>) -> Map<String, Value> {
    let mut wire = Map::new();
    for (name, attribute) in attributes {
        if !attribute.is_configurable() {
            continue;
        }
        let value = match values.get(name) {
            Some(Value::Null) | None => continue,
            Some(value) => value,
        };
        let key = attribute.wire_name.clone().unwrap_or_else(|| name.clone());
        wire.insert(key, value_to_wire(&attribute.type_, value));
    }
    wire
}

fn value_to_wire(type_: &AttributeType, value: &Value) -> Value {
    match (type_, value) {
        (AttributeType::Object(attributes), Value::Object(values)) => {
            Value::Object(object_to_wire(attributes, values))
        }
        (AttributeType::List(element), Value::Array(items)) => {
            Value::Array(items.iter().map(|item| value_to_wire(element, item)).collect())
        }
        (AttributeType::Map(element), Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), value_to_wire(element, v)))
                .collect(),
        ),
        (_, other) => other.clone(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn endpoint_schema() -> Schema {
        let reference: Attributes = [
            ("api_version".to_string(), Attribute {
                wire_name: Some("apiVersion".into()),
                ..Attribute::optional(AttributeType::String)
            }),
            ("name".to_string(), Attribute::required(AttributeType::String)),
        ]
        .into_iter()
        .collect();
        let step: Attributes = [
            ("ref".to_string(), Attribute::optional(AttributeType::Object(reference))),
            ("properties".to_string(), Attribute::optional(AttributeType::Map(Box::new(AttributeType::Dynamic)))),
        ]
        .into_iter()
        .collect();
        Schema {
            description: "steps".into(),
            attributes: [
                ("id".to_string(), Attribute::computed(AttributeType::String)),
                ("steps".to_string(), Attribute::optional(AttributeType::List(Box::new(AttributeType::Object(step))))),
            ]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn attribute_lookup_walks_through_lists() {
        let schema = endpoint_schema();
        assert!(schema.attribute("steps.ref.name").unwrap().required);
        assert!(schema.attribute("steps.ref.kind").is_none());
        assert!(schema.attribute("id.name").is_none());
    }

    #[test]
    fn to_wire_renames_and_drops() {
        let schema = endpoint_schema();
        let config = json!({
            "id": "computed",
            "steps": [{
                "ref": { "api_version": "camel.apache.org/v1alpha1", "name": "log-action" },
                "properties": { "show_headers": true, "unset": null }
            }]
        });
        assert_eq!(
            schema.to_wire(&config),
            json!({
                "steps": [{
                    "ref": { "apiVersion": "camel.apache.org/v1alpha1", "name": "log-action" },
                    "properties": { "show_headers": true }
                }]
            })
        );
    }
}
