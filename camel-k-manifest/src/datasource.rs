use crate::error::{Error, Result};
use crate::metadata::ManifestMetadata;
use crate::schema::{attribute_name, attributes_for, Attribute, AttributeType, Attributes, Schema};
use camel_k::v1alpha1::{KameletBinding, KameletBindingSpec};
use kube::Resource;
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// A read-only data source: configuration in, state out.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// The full type name of the data source, prefixed by the provider type name.
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> Schema;

    /// Compute the state of the data source from its configuration.
    async fn read(&self, config: Value) -> Result<Value>;
}

/// A custom resource that can be rendered by a [`ManifestDataSource`].
pub trait ManifestResource: Resource<DynamicType = ()> {
    type Spec: Serialize + DeserializeOwned + JsonSchema + Send + Sync;

    /// Description of the data source, shown in the schema.
    const DESCRIPTION: &'static str;

    /// Checks the spec beyond what its schema can express.
    fn validate_spec(_spec: &Self::Spec) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

impl ManifestResource for KameletBinding {
    type Spec = KameletBindingSpec;

    const DESCRIPTION: &'static str = "KameletBinding is the Schema for the kamelets binding API";

    fn validate_spec(spec: &KameletBindingSpec) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        spec.validate().map_err(Into::into)
    }
}

/// The configurable part of a manifest data source.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ManifestModel<S> {
    pub metadata: ManifestMetadata,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a, S> {
    api_version: &'a str,
    kind: &'a str,
    metadata: &'a ManifestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    spec: Option<&'a S>,
}

/// Renders a [`ManifestResource`] to YAML.
///
/// The configuration holds `metadata` and `spec`; reading it injects
/// `apiVersion` and `kind` and exposes the YAML as the computed `yaml`
/// attribute, along with an `id` of the form `<namespace>/<name>`.
pub struct ManifestDataSource<K> {
    _resource: PhantomData<fn() -> K>,
}

impl<K> Default for ManifestDataSource<K> {
    fn default() -> Self {
        ManifestDataSource { _resource: PhantomData }
    }
}

impl<K: ManifestResource> ManifestDataSource<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the manifest of a model.
    ///
    /// The manifest goes through a JSON value first: serde_yaml writes
    /// externally tagged enums as YAML tags (`!sink`), Kubernetes expects
    /// single key maps.
    pub fn render(&self, model: &ManifestModel<K::Spec>) -> Result<String> {
        let api_version = K::api_version(&());
        let kind = K::kind(&());
        let manifest = Manifest {
            api_version: &api_version,
            kind: &kind,
            metadata: &model.metadata,
            spec: model.spec.as_ref(),
        };
        let manifest = serde_json::to_value(&manifest).map_err(Error::Encode)?;
        Ok(serde_yaml::to_string(&manifest)?)
    }
}

#[async_trait::async_trait]
impl<K: ManifestResource + 'static> DataSource for ManifestDataSource<K> {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!(
            "{}_{}_{}_{}_manifest",
            provider_type_name,
            K::group(&()).replace('.', "_"),
            attribute_name(&K::kind(&())),
            K::version(&()),
        )
    }

    fn schema(&self) -> Schema {
        let attributes: Attributes = [
            (
                "id",
                Attribute::computed(AttributeType::String)
                    .with_description("Contains the value 'metadata.namespace/metadata.name'."),
            ),
            (
                "yaml",
                Attribute::computed(AttributeType::String)
                    .with_description("The generated manifest in YAML format."),
            ),
            ("metadata", ManifestMetadata::attribute()),
            (
                "spec",
                Attribute::optional(AttributeType::Object(attributes_for::<K::Spec>()))
                    .with_description(format!("The specification of the {}.", K::kind(&()))),
            ),
        ]
        .into_iter()
        .map(|(name, attribute)| (name.to_string(), attribute))
        .collect();

        Schema {
            description: K::DESCRIPTION.to_string(),
            attributes,
        }
    }

    async fn read(&self, config: Value) -> Result<Value> {
        debug!(kind = %K::kind(&()), "Read resource");

        let schema = self.schema();
        let diagnostics = schema.validate(&config);
        if !diagnostics.0.is_empty() {
            return Err(Error::InvalidConfig(diagnostics));
        }

        let model: ManifestModel<K::Spec> = serde_json::from_value(schema.to_wire(&config)).map_err(Error::Decode)?;
        if let Some(spec) = &model.spec {
            K::validate_spec(spec).map_err(Error::InvalidSpec)?;
        }
        let yaml = self.render(&model)?;
        trace!(name = %model.metadata.name, namespace = %model.metadata.namespace, %yaml, "rendered manifest");

        let mut state = config;
        if let Value::Object(values) = &mut state {
            values.insert(
                "id".into(),
                Value::String(format!("{}/{}", model.metadata.namespace, model.metadata.name)),
            );
            values.insert("yaml".into(), Value::String(yaml));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use camel_k::v1alpha1::{Endpoint, ErrorHandlerLog, ErrorHandlerSink, ErrorHandlerSpec};
    use serde_json::json;

    fn data_source() -> ManifestDataSource<KameletBinding> {
        ManifestDataSource::new()
    }

    #[test]
    fn type_name() {
        assert_eq!(
            data_source().type_name("k8s"),
            "k8s_camel_apache_org_kamelet_binding_v1alpha1_manifest"
        );
    }

    #[test]
    fn render_injects_api_version_and_kind() {
        let model = ManifestModel {
            metadata: ManifestMetadata::new("timer-to-log", "default"),
            spec: Some(KameletBindingSpec::new(
                Endpoint::kamelet("timer-source").with_property("message", "hello"),
                Endpoint {
                    uri: Some("log:info".into()),
                    ..Default::default()
                },
            )),
        };
        let yaml = data_source().render(&model).unwrap();
        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(
            parsed,
            json!({
                "apiVersion": "camel.apache.org/v1alpha1",
                "kind": "KameletBinding",
                "metadata": { "name": "timer-to-log", "namespace": "default" },
                "spec": {
                    "source": {
                        "ref": {
                            "apiVersion": "camel.apache.org/v1alpha1",
                            "kind": "Kamelet",
                            "name": "timer-source"
                        },
                        "properties": { "message": "hello" }
                    },
                    "sink": { "uri": "log:info" }
                }
            })
        );
        assert!(yaml.starts_with("apiVersion: camel.apache.org/v1alpha1\nkind: KameletBinding\n"));
    }

    fn timer_to_log(error_handler: ErrorHandlerSpec) -> ManifestModel<KameletBindingSpec> {
        let mut spec = KameletBindingSpec::new(
            Endpoint::kamelet("timer-source"),
            Endpoint::kamelet("log-sink"),
        );
        spec.error_handler = Some(error_handler);
        ManifestModel {
            metadata: ManifestMetadata::new("timer-to-log", "default"),
            spec: Some(spec),
        }
    }

    #[test]
    fn render_error_handlers_as_maps() {
        let handlers = vec![
            (ErrorHandlerSpec::None {}, json!({ "none": {} })),
            (ErrorHandlerSpec::Log(ErrorHandlerLog::default()), json!({ "log": {} })),
            (
                ErrorHandlerSpec::Sink(ErrorHandlerSink {
                    endpoint: Endpoint::kamelet("error-sink"),
                    parameters: None,
                }),
                json!({
                    "sink": {
                        "endpoint": {
                            "ref": {
                                "apiVersion": "camel.apache.org/v1alpha1",
                                "kind": "Kamelet",
                                "name": "error-sink"
                            }
                        }
                    }
                }),
            ),
        ];
        for (handler, expected) in handlers {
            let kind = handler.kind();
            let yaml = data_source().render(&timer_to_log(handler)).unwrap();
            assert!(!yaml.contains('!'), "{kind} rendered as a tag:\n{yaml}");
            assert!(yaml.contains(&format!("errorHandler:\n    {kind}:")), "{yaml}");
            let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(parsed["spec"]["errorHandler"], expected);
        }
    }

    #[test]
    fn rendered_manifest_reads_back_as_kamelet_binding() {
        let model = timer_to_log(ErrorHandlerSpec::Sink(ErrorHandlerSink {
            endpoint: Endpoint::kamelet("error-sink"),
            parameters: None,
        }));
        let yaml = data_source().render(&model).unwrap();
        let value: Value = serde_yaml::from_str(&yaml).unwrap();
        let binding: KameletBinding = serde_json::from_value(value).unwrap();
        assert_eq!(binding.metadata.name.as_deref(), Some("timer-to-log"));
        assert_eq!(binding.metadata.namespace.as_deref(), Some("default"));
        assert_eq!(Some(binding.spec), model.spec);
    }

    #[test]
    fn render_without_spec() {
        let model = ManifestModel::<KameletBindingSpec> {
            metadata: ManifestMetadata::new("empty", "default"),
            spec: None,
        };
        let yaml = data_source().render(&model).unwrap();
        assert!(!yaml.contains("spec"));
    }

    #[async_std::test]
    async fn read_sets_id_and_yaml() {
        let state = data_source()
            .read(json!({
                "metadata": { "name": "timer-to-log", "namespace": "default" },
                "spec": {
                    "source": { "uri": "timer:tick" },
                    "sink": { "uri": "log:info" },
                    "service_account_name": "camel"
                }
            }))
            .await
            .unwrap();
        assert_eq!(state["id"], "default/timer-to-log");
        let yaml = state["yaml"].as_str().unwrap();
        assert!(yaml.contains("serviceAccountName: camel"));
        assert_eq!(state["spec"]["service_account_name"], "camel");
    }

    #[async_std::test]
    async fn read_rejects_invalid_config() {
        let err = data_source()
            .read(json!({
                "metadata": { "name": "Timer", "namespace": "default" },
                "yaml": "manual"
            }))
            .await
            .unwrap_err();
        match err {
            Error::InvalidConfig(diagnostics) => {
                let paths: Vec<_> = diagnostics.0.iter().map(|d| d.path.as_str()).collect();
                assert_eq!(paths, vec!["metadata.name", "yaml"]);
            }
            other => panic!("expected invalid config, got {other}"),
        }
    }

    #[async_std::test]
    async fn read_rejects_out_of_range_integers() {
        let err = data_source()
            .read(json!({
                "metadata": { "name": "timer-to-log", "namespace": "default" },
                "spec": {
                    "source": { "uri": "timer:tick" },
                    "sink": { "uri": "log:info" },
                    "replicas": 3_000_000_000u64
                }
            }))
            .await
            .unwrap_err();
        match err {
            Error::InvalidConfig(diagnostics) => {
                let paths: Vec<_> = diagnostics.0.iter().map(|d| d.path.as_str()).collect();
                assert_eq!(paths, vec!["spec.replicas"]);
            }
            other => panic!("expected invalid config, got {other}"),
        }
    }

    #[async_std::test]
    async fn read_passes_int_or_string_integers_through() {
        let state = data_source()
            .read(json!({
                "metadata": { "name": "timer-to-log", "namespace": "default" },
                "spec": {
                    "source": { "uri": "timer:tick" },
                    "sink": { "uri": "log:info" },
                    "integration": {
                        "traits": {
                            "deployment": {
                                "strategy": "RollingUpdate",
                                "rolling_update_max_surge": 2,
                                "rolling_update_max_unavailable": "25%"
                            }
                        },
                        "template": {
                            "spec": {
                                "containers": [{
                                    "name": "integration",
                                    "liveness_probe": { "http_get": { "path": "/q/health/live", "port": 8080 } }
                                }]
                            }
                        }
                    }
                }
            }))
            .await
            .unwrap();
        let manifest: Value = serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();
        let integration = &manifest["spec"]["integration"];
        let deployment = &integration["traits"]["deployment"];
        assert_eq!(deployment["rollingUpdateMaxSurge"], json!(2));
        assert_eq!(deployment["rollingUpdateMaxUnavailable"], json!("25%"));
        let container = &integration["template"]["spec"]["containers"][0];
        assert_eq!(container["livenessProbe"]["httpGet"]["port"], json!(8080));
    }

    #[async_std::test]
    async fn read_rejects_invalid_endpoints() {
        let err = data_source()
            .read(json!({
                "metadata": { "name": "broken", "namespace": "default" },
                "spec": {
                    "source": { "uri": "timer:tick" },
                    "sink": {}
                }
            }))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSpec(_)), "{err}");
        assert_eq!(
            err.to_string(),
            "invalid spec: invalid sink endpoint: no ref or URI specified in endpoint"
        );
    }
}
