use super::{Endpoint, EndpointPosition, ErrorHandlerSpec, KameletBindingStatus};
use crate::error::Error;
use crate::v1::{Flow, IntegrationSpec};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// KameletBinding is the Schema for the kamelets binding API.
///
/// A binding connects a `source` to a `sink`, optionally through a chain of
/// `steps`, and is materialized by the operator as an Integration.
#[derive(CustomResource, Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[kube(
    kind = "KameletBinding",
    group = "camel.apache.org",
    version = "v1alpha1",
    status = "KameletBindingStatus",
    shortname = "klb",
    scale = r#"{"specReplicasPath":".spec.replicas","statusReplicasPath":".status.replicas","labelSelectorPath":".status.selector"}"#,
    printcolumn = r#"{"name":"Phase","type":"string","description":"The Kamelet Binding phase","jsonPath":".status.phase"}"#,
    printcolumn = r#"{"name":"Replicas","type":"integer","description":"The number of pods","jsonPath":".status.replicas"}"#,
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct KameletBindingSpec {
    /// Integration is an optional integration used to specify custom parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<IntegrationSpec>,
    /// Source is the starting point of the integration defined by this binding
    pub source: Endpoint,
    /// Sink is the destination of the integration defined by this binding
    pub sink: Endpoint,
    /// ErrorHandler is an optional handler called upon an error occurring in the integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_handler: Option<ErrorHandlerSpec>,
    /// Steps contains an optional list of intermediate steps that are executed between the Source and the Sink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Endpoint>>,
    /// Replicas is the number of desired replicas for the binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Custom SA to use for the binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

impl KameletBindingSpec {
    pub fn new(source: Endpoint, sink: Endpoint) -> Self {
        KameletBindingSpec {
            integration: None,
            source,
            sink,
            error_handler: None,
            steps: None,
            replicas: None,
            service_account_name: None,
        }
    }

    /// Every endpoint of the binding in flow order, paired with its position.
    pub fn endpoints(&self) -> impl Iterator<Item = (EndpointPosition, &Endpoint)> + '_ {
        std::iter::once((EndpointPosition::Source, &self.source))
            .chain(
                self.steps
                    .iter()
                    .flatten()
                    .enumerate()
                    .map(|(i, step)| (EndpointPosition::Action(i), step)),
            )
            .chain(std::iter::once((EndpointPosition::Sink, &self.sink)))
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (position, endpoint) in self.endpoints() {
            endpoint.validate().map_err(|reason| Error::InvalidEndpoint {
                position: position.to_string(),
                reason,
            })?;
        }
        if let Some(ErrorHandlerSpec::Sink(sink)) = &self.error_handler {
            sink.endpoint.validate().map_err(|reason| Error::InvalidEndpoint {
                position: "error-handler".into(),
                reason,
            })?;
        }
        Ok(())
    }

    /// The route the operator generates for this binding, in the Camel YAML DSL.
    pub fn to_flow(&self) -> Result<Flow, Error> {
        let from = self.source.camel_uri(EndpointPosition::Source)?;
        let steps = self
            .endpoints()
            .skip(1)
            .map(|(position, endpoint)| endpoint.camel_uri(position).map(|uri| json!({ "to": uri })))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Flow(json!({
            "route": {
                "id": "binding",
                "from": {
                    "uri": from,
                    "steps": steps,
                }
            }
        })))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::EndpointError;
    use kube::{CustomResourceExt, Resource};

    fn timer_to_log() -> KameletBindingSpec {
        KameletBindingSpec {
            steps: Some(vec![Endpoint::kamelet("insert-header-action").with_property("name", "source")]),
            ..KameletBindingSpec::new(
                Endpoint::kamelet("timer-source").with_property("message", "Hello"),
                Endpoint {
                    uri: Some("log:info".into()),
                    ..Default::default()
                },
            )
        }
    }

    #[test]
    fn resource_type_information() {
        assert_eq!(KameletBinding::api_version(&()), "camel.apache.org/v1alpha1");
        assert_eq!(KameletBinding::kind(&()), "KameletBinding");
        assert_eq!(KameletBinding::plural(&()), "kameletbindings");

        let crd = KameletBinding::crd();
        assert_eq!(crd.spec.group, "camel.apache.org");
        assert_eq!(crd.spec.names.short_names, Some(vec!["klb".to_string()]));
    }

    #[test]
    fn to_flow_chains_steps_before_the_sink() {
        let flow = timer_to_log().to_flow().unwrap();
        assert_eq!(
            flow.0,
            json!({
                "route": {
                    "id": "binding",
                    "from": {
                        "uri": "kamelet:timer-source/source",
                        "steps": [
                            { "to": "kamelet:insert-header-action/action-0" },
                            { "to": "log:info" }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn validate_reports_endpoint_position() {
        let mut spec = timer_to_log();
        spec.steps = Some(vec![Endpoint::default()]);
        match spec.validate() {
            Err(Error::InvalidEndpoint { position, reason }) => {
                assert_eq!(position, "action-0");
                assert_eq!(reason, EndpointError::EmptyEndpoint);
            }
            other => panic!("expected invalid endpoint, got {:?}", other),
        }
    }

    fn mock_path() -> String {
        format!("{}/../test/mock/", env!("CARGO_MANIFEST_DIR"))
    }

    fn read_mock<T: Resource + serde::de::DeserializeOwned>(filename: &str) -> T {
        let path = mock_path() + filename;
        let yaml = std::fs::read_to_string(path).expect("path to mock");
        let value: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserialize_kamelet_binding_mock() {
        let binding = read_mock::<KameletBinding>("kamelet_binding.yaml");
        assert_eq!(binding.metadata.name.as_deref(), Some("kafka-to-http"));
        assert!(binding.spec.source.is_kamelet());
        assert_eq!(binding.spec.replicas, Some(2));
        assert_eq!(binding.spec.error_handler.as_ref().map(|h| h.kind()), Some("sink"));
        assert!(binding.status.as_ref().map_or(false, |s| s.is_ready()));
        binding.spec.validate().expect("mock binding is valid");

        let traits = binding.spec.integration.as_ref()
            .and_then(|i| i.traits.as_ref())
            .expect("traits are set");
        assert_eq!(traits.container.as_ref().and_then(|c| c.request_cpu.as_deref()), Some("250m"));
        assert_eq!(
            traits.knative_service.as_ref().and_then(|k| k.trait_.enabled),
            Some(false)
        );

        let flow = binding.spec.to_flow().unwrap();
        assert_eq!(
            flow.0["route"]["from"]["steps"][1]["to"],
            "https://orders.example.com/api/ingest?httpMethod=POST"
        );
    }

    #[test]
    fn serialize_omits_unset_fields() {
        let binding = KameletBinding::new("timer-to-log", timer_to_log());
        let value = serde_json::to_value(&binding.spec).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["sink", "source", "steps"]);
    }
}
