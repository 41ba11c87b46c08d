use crate::schema::{Attribute, AttributeType, Attributes, Validator};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The metadata of a manifest: the subset of `ObjectMeta` a practitioner sets.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ManifestMetadata {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl ManifestMetadata {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        ManifestMetadata {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// The `metadata` attribute of a namespaced manifest data source.
    pub fn attribute() -> Attribute {
        let string_map = || AttributeType::Map(Box::new(AttributeType::String));
        let attributes: Attributes = [
            (
                "name",
                Attribute::required(AttributeType::String)
                    .with_description("Unique identifier for this object.")
                    .with_validator(Validator::DnsSubdomain),
            ),
            (
                "namespace",
                Attribute::required(AttributeType::String)
                    .with_description("Namespace of the object, cannot be changed.")
                    .with_validator(Validator::DnsLabel),
            ),
            (
                "labels",
                Attribute::optional(string_map())
                    .with_description(
                        "Map of string keys and values that can be used to organize and categorize (scope and select) objects.",
                    )
                    .with_validator(Validator::Labels),
            ),
            (
                "annotations",
                Attribute::optional(string_map())
                    .with_description(
                        "Unstructured key value map stored with a resource that may be set by external tools \
                         to store and retrieve arbitrary metadata.",
                    )
                    .with_validator(Validator::Annotations),
            ),
        ]
        .into_iter()
        .map(|(name, attribute)| (name.to_string(), attribute))
        .collect();

        Attribute::required(AttributeType::Object(attributes))
            .with_description("Data that helps uniquely identify this object.")
    }
}

impl From<ManifestMetadata> for ObjectMeta {
    fn from(metadata: ManifestMetadata) -> ObjectMeta {
        let ManifestMetadata { name, namespace, labels, annotations } = metadata;
        ObjectMeta {
            name: Some(name),
            namespace: Some(namespace),
            labels,
            annotations,
            ..Default::default()
        }
    }
}
