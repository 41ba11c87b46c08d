use super::{PodSpecTemplate, Traits};
use k8s_openapi::api::core::v1::ObjectReference;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// IntegrationSpec specifies the configuration of an Integration.
/// The Integration will be watched by the operator which will be in charge to run the related application,
/// according to the configuration specified.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSpec {
    /// the number of `Pods` needed for the running Integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// the sources which contain the Camel routes to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// a source in YAML DSL language which contain the routes to run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<Vec<Flow>>,
    /// Deprecated: use `mount` trait instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceSpec>>,
    /// Deprecated: use the IntegrationKit field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kit: Option<String>,
    /// the reference of the `IntegrationKit` which is used for this Integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_kit: Option<ObjectReference>,
    /// the list of Java dependencies required by the Integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// the profile needed to run this Integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<TraitProfile>,
    /// the traits needed to run this Integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Traits>,
    /// Pod template customization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PodSpecTemplate>,
    /// Deprecated: use the `camel`, `mount` and `environment` traits instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<ConfigurationSpec>>,
    /// additional Maven repositories to be used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<String>>,
    /// custom SA to use for the Integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

/// Flow is a unstructured object representing a Camel Flow in YAML/JSON DSL
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct Flow(pub serde_json::Value);

/// TraitProfile represents lists of traits that are enabled for the specific installation/integration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum TraitProfile {
    Kubernetes,
    Knative,
    OpenShift,
}

/// ConfigurationSpec represents a generic configuration specification.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSpec {
    /// represents the type of configuration, ie: property, configmap, secret, ...
    #[serde(rename = "type")]
    pub type_: String,
    /// the value to assign to the configuration (syntax may vary depending on the `Type`)
    pub value: String,
    /// Deprecated: no longer used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Deprecated: no longer used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_mount_point: Option<String>,
    /// Deprecated: no longer used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_key: Option<String>,
}

/// DataSpec represents the way the source is materialized in the running `Pod`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataSpec {
    /// the name of the specification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// the path where the file is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// the source code (plain text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// the source code (binary, base64 encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    /// the confimap reference holding the source content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
    /// the confimap key holding the source content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_key: Option<String>,
    /// the content type (tipically text or binary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// if the content is compressed (base64 encrypted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<bool>,
}

/// SourceSpec defines the configuration for one or more routes to be executed in a certain Camel DSL language.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpec {
    /// contains configuration related to the source code
    #[serde(flatten)]
    pub data: DataSpec,
    /// specify which is the language (Camel DSL) used to interpret this source code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Loader is an optional id of the org.apache.camel.k.RoutesLoader that will
    /// interpret this source at runtime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
    /// Interceptors are optional identifiers the org.apache.camel.k.RoutesLoader
    /// uses to pre/post process sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<Vec<String>>,
    /// Type defines the kind of source described by this object
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<SourceType>,
    /// List of property names defined in the source (e.g. if type is "template")
    #[serde(rename = "property-names", skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Vec<String>>,
}

/// Language represents a supported language (Camel DSL)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Groovy,
    Js,
    Xml,
    Kotlin,
    Yaml,
    Kamelet,
    Kts,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SourceType {
    Default,
    ErrorHandler,
    Template,
}

/// ResourceSpec represent an attached resource which will be materialized as a file on the running `Pod`.
/// Deprecated: use the `mount` trait instead.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    #[serde(flatten)]
    pub data: DataSpec,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn source_spec_flattens_data() {
        let source = SourceSpec {
            data: DataSpec {
                name: Some("routes.yaml".into()),
                content: Some("- from: {}".into()),
                ..Default::default()
            },
            language: Some(Language::Yaml),
            type_: Some(SourceType::ErrorHandler),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            json!({
                "name": "routes.yaml",
                "content": "- from: {}",
                "language": "yaml",
                "type": "errorHandler"
            })
        );
    }

    #[test]
    fn unset_fields_are_omitted() {
        let spec = IntegrationSpec {
            replicas: Some(2),
            profile: Some(TraitProfile::OpenShift),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({ "replicas": 2, "profile": "OpenShift" })
        );
    }
}
