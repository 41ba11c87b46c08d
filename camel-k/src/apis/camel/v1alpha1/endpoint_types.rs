use crate::error::{DiscoveryError, EndpointError, Error};
use k8s_openapi::api::core::v1::ObjectReference;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const KAMELET_API_VERSION: &str = "camel.apache.org/v1alpha1";
pub const KAMELET_KIND: &str = "Kamelet";

/// Endpoint represents a source/sink external entity (could be any Kubernetes resource or Camel URI).
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct Endpoint {
    /// Ref can be used to declare a Kubernetes resource as source/sink endpoint
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<ObjectReference>,
    /// URI can be used to specify the (Camel) endpoint explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Properties are a key value representation of endpoint properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<EndpointProperties>,
    /// Types defines the data type of the data produced/consumed by the endpoint and references a given data type specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeMap<String, EventTypeSpec>>,
}

/// EndpointProperties is a key/value struct represented as JSON raw to allow numeric/boolean values
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct EndpointProperties(pub BTreeMap<String, serde_json::Value>);

/// EventTypeSpec represents a specification for an event type.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSpec {
    /// media type as expected for HTTP media types (ie, application/json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// the expected schema for the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// Where an [`Endpoint`] sits in a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointPosition {
    Source,
    Action(usize),
    Sink,
}

impl fmt::Display for EndpointPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointPosition::Source => write!(f, "source"),
            EndpointPosition::Action(i) => write!(f, "action-{i}"),
            EndpointPosition::Sink => write!(f, "sink"),
        }
    }
}

impl From<ObjectReference> for Endpoint {
    fn from(reference: ObjectReference) -> Self {
        Endpoint {
            ref_: Some(reference),
            ..Default::default()
        }
    }
}

impl From<url::Url> for Endpoint {
    fn from(uri: url::Url) -> Self {
        Endpoint {
            uri: Some(uri.into()),
            ..Default::default()
        }
    }
}

impl Endpoint {
    /// An endpoint referencing the Kamelet `name`.
    pub fn kamelet(name: impl Into<String>) -> Self {
        ObjectReference {
            api_version: Some(KAMELET_API_VERSION.into()),
            kind: Some(KAMELET_KIND.into()),
            name: Some(name.into()),
            ..Default::default()
        }
        .into()
    }

    /// Adds a property, creating the property map if needed.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties
            .get_or_insert_with(EndpointProperties::default)
            .0
            .insert(key.into(), value.into());
        self
    }

    /// Whether the endpoint references a Kamelet.
    pub fn is_kamelet(&self) -> bool {
        match &self.ref_ {
            Some(r) => {
                r.kind.as_deref() == Some(KAMELET_KIND)
                    && r.api_version
                        .as_deref()
                        .map_or(true, |v| v.starts_with("camel.apache.org/"))
            }
            None => false,
        }
    }

    /// Exactly one of `ref` or `uri` must be set, refs need a kind and a name,
    /// and uris need a scheme.
    pub fn validate(&self) -> Result<(), EndpointError> {
        match (&self.ref_, &self.uri) {
            (None, None) => Err(EndpointError::EmptyEndpoint),
            (Some(_), Some(_)) => Err(EndpointError::RefAndUri),
            (Some(r), None) => {
                if r.kind.as_deref().map_or(true, str::is_empty) {
                    return Err(EndpointError::IncompleteRef("kind"));
                }
                if r.name.as_deref().map_or(true, str::is_empty) {
                    return Err(EndpointError::IncompleteRef("name"));
                }
                Ok(())
            }
            (None, Some(uri)) => {
                url::Url::parse(uri)?;
                Ok(())
            }
        }
    }

    /// Resolve the Camel URI the integration will use for this endpoint.
    pub fn camel_uri(&self, position: EndpointPosition) -> Result<String, Error> {
        self.validate().map_err(|reason| Error::InvalidEndpoint {
            position: position.to_string(),
            reason,
        })?;

        match (&self.ref_, &self.uri) {
            (Some(r), _) if self.is_kamelet() => {
                // validated above
                let name = r.name.as_deref().unwrap_or_default();
                Ok(format!("kamelet:{name}/{position}"))
            }
            (Some(r), _) => Err(Error::Discovery(DiscoveryError::ResolveReferenceNotImplemented(
                r.kind.clone().unwrap_or_default(),
            ))),
            (None, Some(uri)) => {
                let mut url = url::Url::parse(uri).map_err(|e| Error::InvalidEndpoint {
                    position: position.to_string(),
                    reason: e.into(),
                })?;
                let properties: Vec<(&String, String)> = self
                    .properties
                    .iter()
                    .flat_map(|p| p.0.iter())
                    .filter_map(|(key, value)| property_string(value).map(|value| (key, value)))
                    .collect();
                if !properties.is_empty() {
                    let mut query = url::form_urlencoded::Serializer::new(url.query().unwrap_or_default().to_string());
                    for (key, value) in &properties {
                        query.append_pair(key, value);
                    }
                    url.set_query(Some(&query.finish()));
                }
                Ok(url.into())
            }
            (None, None) => Err(Error::InvalidEndpoint {
                position: position.to_string(),
                reason: EndpointError::EmptyEndpoint,
            }),
        }
    }
}

/// Query parameter value of a property, unset for `null`.
fn property_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_kamelet_endpoint() {
        let endpoint = Endpoint::kamelet("timer-source").with_property("message", "hello");
        let json = json!({
            "ref": {
                "apiVersion": "camel.apache.org/v1alpha1",
                "kind": "Kamelet",
                "name": "timer-source"
            },
            "properties": { "message": "hello" }
        });
        assert_eq!(serde_json::to_value(&endpoint).unwrap(), json);
    }

    #[test]
    fn validate_requires_ref_or_uri() {
        assert_eq!(Endpoint::default().validate(), Err(EndpointError::EmptyEndpoint));

        let mut both = Endpoint::kamelet("log-sink");
        both.uri = Some("log:info".into());
        assert_eq!(both.validate(), Err(EndpointError::RefAndUri));

        let nameless: Endpoint = ObjectReference {
            kind: Some("KafkaTopic".into()),
            ..Default::default()
        }
        .into();
        assert_eq!(nameless.validate(), Err(EndpointError::IncompleteRef("name")));

        let relative = Endpoint {
            uri: Some("no-scheme".into()),
            ..Default::default()
        };
        assert!(matches!(relative.validate(), Err(EndpointError::UriParseErr(_))));

        assert_eq!(Endpoint::kamelet("log-sink").validate(), Ok(()));
    }

    #[test]
    fn kamelet_ref_resolves_to_kamelet_uri() {
        let endpoint = Endpoint::kamelet("timer-source");
        assert_eq!(
            endpoint.camel_uri(EndpointPosition::Source).unwrap(),
            "kamelet:timer-source/source"
        );
        assert_eq!(
            endpoint.camel_uri(EndpointPosition::Action(1)).unwrap(),
            "kamelet:timer-source/action-1"
        );
    }

    #[test]
    fn uri_properties_become_query_parameters() {
        let endpoint = Endpoint {
            uri: Some("timer:tick?delay=0".into()),
            ..Default::default()
        }
        .with_property("period", 1000)
        .with_property("includeMetadata", true);
        assert_eq!(
            endpoint.camel_uri(EndpointPosition::Source).unwrap(),
            "timer:tick?delay=0&includeMetadata=true&period=1000"
        );
    }

    #[test]
    fn null_properties_are_skipped() {
        let endpoint = Endpoint {
            uri: Some("log:info".into()),
            ..Default::default()
        }
        .with_property("showHeaders", serde_json::Value::Null);
        assert_eq!(endpoint.camel_uri(EndpointPosition::Sink).unwrap(), "log:info");

        let endpoint = endpoint.with_property("showBody", true);
        assert_eq!(
            endpoint.camel_uri(EndpointPosition::Sink).unwrap(),
            "log:info?showBody=true"
        );
    }

    #[test]
    fn empty_endpoint_has_no_uri() {
        match Endpoint::default().camel_uri(EndpointPosition::Sink) {
            Err(Error::InvalidEndpoint { position, reason }) => {
                assert_eq!(position, "sink");
                assert_eq!(reason, EndpointError::EmptyEndpoint);
            }
            other => panic!("expected invalid endpoint, got {:?}", other),
        }
    }

    #[test]
    fn other_refs_are_not_resolved() {
        let endpoint: Endpoint = ObjectReference {
            api_version: Some("messaging.knative.dev/v1".into()),
            kind: Some("Channel".into()),
            name: Some("events".into()),
            ..Default::default()
        }
        .into();
        assert!(matches!(
            endpoint.camel_uri(EndpointPosition::Sink),
            Err(Error::Discovery(DiscoveryError::ResolveReferenceNotImplemented(kind))) if kind == "Channel"
        ));
    }
}
