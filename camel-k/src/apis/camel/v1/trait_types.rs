//! Trait configuration of an Integration.
//!
//! Every trait embeds [`Trait`], which carries the `enabled` switch and the
//! legacy free-form `configuration`.
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Traits represents the collection of trait configurations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct Traits {
    /// The configuration of Affinity trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<AffinityTrait>,
    /// The configuration of Builder trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderTrait>,
    /// The configuration of Camel trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camel: Option<CamelTrait>,
    /// The configuration of Container trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerTrait>,
    /// The configuration of Cron trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<CronTrait>,
    /// The configuration of Dependencies trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Trait>,
    /// The configuration of Deployer trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployer: Option<DeployerTrait>,
    /// The configuration of Deployment trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<DeploymentTrait>,
    /// The configuration of Environment trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentTrait>,
    /// The configuration of Error Handler trait
    #[serde(rename = "error-handler", skip_serializing_if = "Option::is_none")]
    pub error_handler: Option<ErrorHandlerTrait>,
    /// The configuration of GC trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc: Option<GcTrait>,
    /// The configuration of Health trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthTrait>,
    /// The configuration of Ingress trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<IngressTrait>,
    /// The configuration of Istio trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub istio: Option<IstioTrait>,
    /// The configuration of Jolokia trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jolokia: Option<JolokiaTrait>,
    /// The configuration of JVM trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm: Option<JvmTrait>,
    /// The configuration of Kamelets trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kamelets: Option<KameletsTrait>,
    /// The configuration of Knative trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knative: Option<KnativeTrait>,
    /// The configuration of Knative Service trait
    #[serde(rename = "knative-service", skip_serializing_if = "Option::is_none")]
    pub knative_service: Option<KnativeServiceTrait>,
    /// The configuration of Logging trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingTrait>,
    /// The configuration of Mount trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount: Option<MountTrait>,
    /// The configuration of OpenAPI trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<OpenApiTrait>,
    /// The configuration of Owner trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerTrait>,
    /// The configuration of PDB trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdb: Option<PdbTrait>,
    /// The configuration of Platform trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformTrait>,
    /// The configuration of Pod trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod: Option<Trait>,
    /// The configuration of Prometheus trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prometheus: Option<PrometheusTrait>,
    /// The configuration of Pull Secret trait
    #[serde(rename = "pull-secret", skip_serializing_if = "Option::is_none")]
    pub pull_secret: Option<PullSecretTrait>,
    /// The configuration of Quarkus trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarkus: Option<QuarkusTrait>,
    /// The configuration of Registry trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<Trait>,
    /// The configuration of Route trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteTrait>,
    /// The configuration of Service trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceTrait>,
    /// The configuration of Service Binding trait
    #[serde(rename = "service-binding", skip_serializing_if = "Option::is_none")]
    pub service_binding: Option<ServiceBindingTrait>,
    /// The configuration of Toleration trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toleration: Option<TolerationTrait>,
    /// Deprecated: for backward compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keda: Option<AddonTrait>,
    /// Deprecated: for backward compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master: Option<AddonTrait>,
    /// Deprecated: for backward compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strimzi: Option<AddonTrait>,
    /// Deprecated: for backward compatibility.
    #[serde(rename = "3scale", skip_serializing_if = "Option::is_none")]
    pub three_scale: Option<AddonTrait>,
    /// Deprecated: for backward compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing: Option<AddonTrait>,
    /// The extension point with addon traits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons: Option<BTreeMap<String, AddonTrait>>,
}

/// Base type for all traits.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct Trait {
    /// Can be used to enable or disable a trait. All traits share this common property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Legacy trait configuration parameters.
    /// Deprecated: for backward compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
}

/// An addon trait is kept as unstructured JSON, its schema is owned by the addon.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct AddonTrait(pub serde_json::Value);

/// Allows constraining which nodes the integration pod(s) are eligible to be scheduled on,
/// based on labels on the node, or with inter-pod affinity and anti-affinity, based on labels on pods
/// that are already running on the nodes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AffinityTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Always co-locates multiple replicas of the integration in the same node (default *false*).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_affinity: Option<bool>,
    /// Never co-locates multiple replicas of the integration in the same node (default *false*).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<bool>,
    /// Defines a set of nodes the integration pod(s) are eligible to be scheduled on, based on labels on the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity_labels: Option<Vec<String>>,
    /// Defines a set of pods (namely those matching the label selector, relative to the given namespace) that the
    /// integration pod(s) should be co-located with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_affinity_labels: Option<Vec<String>>,
    /// Defines a set of pods (namely those matching the label selector, relative to the given namespace) that the
    /// integration pod(s) should not be co-located with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity_labels: Option<Vec<String>>,
}

/// The builder trait is internally used to determine the best strategy to
/// build and configure IntegrationKits.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuilderTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Enable verbose logging on build components that support it (e.g. OpenShift build pod). Kaniko and Buildah are not supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    /// A list of properties to be provided to the build task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    /// A list of tasks to be executed (available only when using `pod` strategy) with format `<name>;<container-image>;<container-command>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    /// A list of tasks sorted by the order of execution in a csv format, ie, `<taskName1>,<taskName2>,...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_filter: Option<String>,
    /// A list of request cpu configuration for the specific task with format `<task-name>:<request-cpu-conf>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_request_cpu: Option<Vec<String>>,
    /// A list of request memory configuration for the specific task with format `<task-name>:<request-memory-conf>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_request_memory: Option<Vec<String>>,
    /// A list of limit cpu configuration for the specific task with format `<task-name>:<limit-cpu-conf>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_limit_cpu: Option<Vec<String>>,
    /// A list of limit memory configuration for the specific task with format `<task-name>:<limit-memory-conf>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_limit_memory: Option<Vec<String>>,
}

/// The Camel trait can be used to configure versions of Apache Camel K runtime and related libraries.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CamelTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The camel-k-runtime version to use for the integration. It overrides the default version set in the Integration Platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
    /// A list of properties to be provided to the Integration runtime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum PullPolicy {
    Always,
    Never,
    IfNotPresent,
}

/// The Container trait can be used to configure properties of the container where the integration will run.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// To automatically enable the trait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// The minimum amount of CPU required.
    #[serde(rename = "requestCPU", skip_serializing_if = "Option::is_none")]
    pub request_cpu: Option<String>,
    /// The minimum amount of memory required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_memory: Option<String>,
    /// The maximum amount of CPU required.
    #[serde(rename = "limitCPU", skip_serializing_if = "Option::is_none")]
    pub limit_cpu: Option<String>,
    /// The maximum amount of memory required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_memory: Option<String>,
    /// Can be used to enable/disable exposure via kubernetes Service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expose: Option<bool>,
    /// To configure a different port exposed by the container (default `8080`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// To configure a different port name for the port exposed by the container (default `http`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,
    /// To configure under which service port the container port is to be exposed (default `80`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_port: Option<i32>,
    /// To configure under which service port name the container port is to be exposed (default `http`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_port_name: Option<String>,
    /// The main container name. It's named `integration` by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The main container image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// The pull policy: Always|Never|IfNotPresent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<PullPolicy>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum ConcurrencyPolicy {
    Allow,
    Forbid,
    Replace,
}

/// The Cron trait can be used to customize the behaviour of periodic timer/cron based integrations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CronTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The CronJob schedule for the whole integration. If multiple routes are declared, they must have the same schedule for this
    /// mechanism to work correctly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// A comma separated list of the Camel components that need to be customized in order for them to work when the schedule is triggered externally by Kubernetes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,
    /// Use the default Camel implementation of the `cron` endpoint (`quartz`) instead of trying to materialize the integration
    /// as Kubernetes CronJob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    /// Specifies how to treat concurrent executions of a Job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency_policy: Option<ConcurrencyPolicy>,
    /// Automatically deploy the integration as CronJob when all routes are
    /// either starting from a periodic consumer (only `cron`, `timer` and `quartz` are supported) or a passive consumer (e.g. `direct` is a passive consumer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// Optional deadline in seconds for starting the job if it misses scheduled
    /// time for any reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_deadline_seconds: Option<i64>,
    /// Specifies the duration in seconds, relative to the start time, that the job
    /// may be continuously active before it is considered to be failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_deadline_seconds: Option<i64>,
    /// Specifies the number of retries before marking the job failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_limit: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DeployerKind {
    Deployment,
    CronJob,
    KnativeService,
}

/// The deployer trait is responsible for deploying the resources owned by the integration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeployerTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Allows to explicitly select the desired deployment kind between `deployment`, `cron-job` or `knative-service` when creating the resources for running the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DeployerKind>,
    /// Use server-side apply to update the owned resources (default `true`).
    #[serde(rename = "useSSA", skip_serializing_if = "Option::is_none")]
    pub use_ssa: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum DeploymentStrategyType {
    Recreate,
    RollingUpdate,
}

/// The Deployment trait is responsible for generating the Kubernetes deployment that will make sure
/// the integration will run in the cluster.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The maximum time in seconds for the deployment to make progress before it
    /// is considered to be failed. It defaults to 60s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i32>,
    /// The deployment strategy to use to replace existing pods with new ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<DeploymentStrategyType>,
    /// The maximum number of pods that can be unavailable during the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_update_max_unavailable: Option<IntOrString>,
    /// The maximum number of pods that can be scheduled above the desired number of pods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_update_max_surge: Option<IntOrString>,
}

/// The environment trait is used internally to inject standard environment variables in the integration container,
/// such as `NAMESPACE`, `POD_NAME` and others.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Enables injection of `NAMESPACE` and `POD_NAME` environment variables (default `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_meta: Option<bool>,
    /// Propagates the `HTTP_PROXY`, `HTTPS_PROXY` and `NO_PROXY` environment variables (default `true`)
    #[serde(rename = "httpProxy", skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<bool>,
    /// A list of environment variables to be added to the integration container.
    /// The syntax is KEY=VALUE, e.g., `MY_VAR="my value"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Vec<String>>,
}

/// The error-handler is a platform trait used to inject Error Handler source into the integration runtime.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHandlerTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The error handler ref name provided or found in application properties
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryCacheType {
    Disabled,
    Disk,
    Memory,
}

/// The GC Trait garbage-collects all resources that are no longer necessary upon integration updates.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GcTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Discovery client cache to be used, either `disabled`, `disk` or `memory` (default `memory`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_cache: Option<DiscoveryCacheType>,
}

/// The health trait is responsible for configuring the health probes on the integration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Configures the liveness probe for the integration container (default `false`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe_enabled: Option<bool>,
    /// Scheme to use when connecting. Defaults to HTTP. Applies to the liveness probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_scheme: Option<String>,
    /// Number of seconds after the container has started before the liveness probe is initiated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_initial_delay: Option<i32>,
    /// Number of seconds after which the liveness probe times out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_timeout: Option<i32>,
    /// How often to perform the liveness probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_period: Option<i32>,
    /// Minimum consecutive successes for the liveness probe to be considered successful after having failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_success_threshold: Option<i32>,
    /// Minimum consecutive failures for the liveness probe to be considered failed after having succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_failure_threshold: Option<i32>,
    /// Configures the readiness probe for the integration container (default `true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe_enabled: Option<bool>,
    /// Scheme to use when connecting. Defaults to HTTP. Applies to the readiness probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_scheme: Option<String>,
    /// Number of seconds after the container has started before the readiness probe is initiated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_initial_delay: Option<i32>,
    /// Number of seconds after which the readiness probe times out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_timeout: Option<i32>,
    /// How often to perform the readiness probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_period: Option<i32>,
    /// Minimum consecutive successes for the readiness probe to be considered successful after having failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_success_threshold: Option<i32>,
    /// Minimum consecutive failures for the readiness probe to be considered failed after having succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_failure_threshold: Option<i32>,
    /// Configures the startup probe for the integration container (default `false`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_probe_enabled: Option<bool>,
    /// Scheme to use when connecting. Defaults to HTTP. Applies to the startup probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_scheme: Option<String>,
    /// Number of seconds after the container has started before the startup probe is initiated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_initial_delay: Option<i32>,
    /// Number of seconds after which the startup probe times out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_timeout: Option<i32>,
    /// How often to perform the startup probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_period: Option<i32>,
    /// Minimum consecutive successes for the startup probe to be considered successful after having failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_success_threshold: Option<i32>,
    /// Minimum consecutive failures for the startup probe to be considered failed after having succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_failure_threshold: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum PathType {
    Exact,
    Prefix,
    ImplementationSpecific,
}

/// The Ingress trait can be used to expose the service associated with the integration
/// to clients outside the cluster.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngressTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The annotations added to the ingress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// To configure the host exposed by the ingress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// To configure the path exposed by the ingress (default `/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// To configure the path type exposed by the ingress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_type: Option<PathType>,
    /// To automatically add an ingress whenever the integration uses an HTTP endpoint consumer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

/// The Istio trait allows configuring properties related to the Istio service mesh,
/// such as sidecar injection and outbound IP ranges.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IstioTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Configures a (comma-separated) list of CIDR subnets that should not be intercepted by the Istio proxy (`10.0.0.0/8,172.16.0.0/12,192.168.0.0/16` by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<String>,
    /// Forces the value for labels `sidecar.istio.io/inject`. By default the label is set to `true` on deployment and not set on Knative Service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inject: Option<bool>,
}

/// The Jolokia trait activates and configures the Jolokia Java agent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JolokiaTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The PEM encoded CA certification file path, used to verify client certificates.
    #[serde(rename = "CACert", skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<String>,
    /// The principal(s) which must be given in a client certificate to allow access to the Jolokia endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_principal: Option<Vec<String>>,
    /// Listen for multicast requests (default `false`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_enabled: Option<bool>,
    /// Mandate the client certificate contains a client flag in the extended key usage section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_client_check: Option<bool>,
    /// The Host address to which the Jolokia agent should bind to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The password used for authentication, applicable when the `user` option is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// The Jolokia endpoint port (default `8778`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The protocol to use, either `http` or `https` (default `https` for OpenShift)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// The user to be used for authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Whether client certificates should be used for authentication (default `true` for OpenShift).
    #[serde(rename = "useSSLClientAuthentication", skip_serializing_if = "Option::is_none")]
    pub use_ssl_client_authentication: Option<bool>,
    /// A list of additional Jolokia options as defined
    /// in https://jolokia.org/reference/html/agents.html#agent-jvm-config[JVM agent configuration options]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// The JVM trait is used to configure the JVM that runs the integration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JvmTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Activates remote debugging, so that a debugger can be attached to the JVM, e.g., using port-forwarding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Suspends the target JVM immediately before the main class is loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_suspend: Option<bool>,
    /// Prints the command used the start the JVM in the container logs (default `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_command: Option<bool>,
    /// Transport address at which to listen for the newly launched JVM (default `*:5005`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_address: Option<String>,
    /// A list of JVM options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Additional JVM classpath (use `Linux` classpath separator)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classpath: Option<String>,
}

/// The kamelets trait is a platform trait used to inject Kamelets into the integration runtime.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletsTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Automatically inject all referenced Kamelets and their default configuration (enabled by default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// Comma separated list of Kamelet names to load into the current integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
}

/// The Knative trait automatically discovers addresses of Knative resources and inject them into the
/// running integration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnativeTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// List of channels used as source of integration routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_sources: Option<Vec<String>>,
    /// List of channels used as destination of integration routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_sinks: Option<Vec<String>>,
    /// List of channels used as source of integration routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_sources: Option<Vec<String>>,
    /// List of endpoints used as destination of integration routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_sinks: Option<Vec<String>>,
    /// List of event types that the integration will be subscribed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_sources: Option<Vec<String>>,
    /// List of event types that the integration will produce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_sinks: Option<Vec<String>>,
    /// Enables filtering on events based on the header "ce-knativehistory".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_source_channels: Option<bool>,
    /// Allows binding the integration to a sink via a Knative SinkBinding resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink_binding: Option<bool>,
    /// Enable automatic discovery of all trait properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// Enables the camel-k-operator to set the "bindings.knative.dev/include=true" label to the namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_label: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RolloutVisibility {
    #[serde(rename = "cluster-local")]
    ClusterLocal,
}

/// The Knative Service trait allows configuring options when running the Integration as a Knative service, instead of
/// a standard Kubernetes Deployment.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnativeServiceTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The annotations added to route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// Configures the Knative autoscaling class property (e.g. to set `hpa.autoscaling.knative.dev` or `kpa.autoscaling.knative.dev` autoscaling).
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub autoscaling_class: Option<String>,
    /// Configures the Knative autoscaling metric property (e.g. to set `concurrency` based or `cpu` based autoscaling).
    #[serde(rename = "autoscalingMetric", skip_serializing_if = "Option::is_none")]
    pub autoscaling_metric: Option<String>,
    /// Sets the allowed concurrency level or CPU percentage (depending on the autoscaling metric) for each Pod.
    #[serde(rename = "autoscalingTarget", skip_serializing_if = "Option::is_none")]
    pub autoscaling_target: Option<i32>,
    /// The minimum number of Pods that should be running at any time for the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<i32>,
    /// An upper bound for the number of Pods that can be running in parallel for the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<i32>,
    /// Enables to gradually shift traffic to the latest Revision and sets the rollout duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollout_duration: Option<String>,
    /// Setting `cluster-local`, Knative service becomes a private service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<RolloutVisibility>,
    /// Automatically deploy the integration as Knative service when all conditions hold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

/// The Logging trait is used to configure Integration runtime logging options (such as color and format).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggingTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Colorize the log output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
    /// Logs message format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Adjust the logging level (defaults to INFO)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Output the logs in JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    /// Enable "pretty printing" of the JSON logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_pretty_print: Option<bool>,
}

/// The Mount trait can be used to configure volumes mounted on the Integration Pods.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MountTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// A list of configuration pointing to configmap/secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<String>>,
    /// A list of resources (text or binary content) pointing to configmap/secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    /// A list of Persistent Volume Claims to be mounted. Syntax: [pvcname:/container/path]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<String>>,
    /// Enable "hot reload" when a secret/configmap mounted is edited (default `false`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_reload: Option<bool>,
}

/// The OpenAPI DSL trait is internally used to allow creating integrations from a OpenAPI specs.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The configmaps holding the spec of the OpenAPI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configmaps: Option<Vec<String>>,
}

/// The Owner trait ensures that all created resources belong to the integration being created
/// and transfers annotations and labels on the integration onto these owned resources.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The set of annotations to be transferred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_annotations: Option<Vec<String>>,
    /// The set of labels to be transferred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_labels: Option<Vec<String>>,
}

/// The PDB trait allows to configure the PodDisruptionBudget resource for the Integration pods.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdbTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The number of pods for the Integration that must still be available after an eviction.
    /// It can be either an absolute number or a percentage.
    /// Only one of `min-available` and `max-unavailable` can be specified.
    #[serde(rename = "min-available", skip_serializing_if = "Option::is_none")]
    pub min_available: Option<String>,
    /// The number of pods for the Integration that can be unavailable after an eviction.
    /// It can be either an absolute number or a percentage (default `1` if `min-available` is also not set).
    /// Only one of `max-unavailable` and `min-available` can be specified.
    #[serde(rename = "max-unavailable", skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<String>,
}

/// The platform trait is a base trait that is used to assign an integration platform to an integration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// To create a default (empty) platform when the platform is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_default: Option<bool>,
    /// Indicates if the platform should be created globally in the case of global operator (default true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    /// To automatically detect from the environment if a default platform can be created (it will be created on OpenShift only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

/// The Prometheus trait configures a Prometheus-compatible endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// Whether a `PodMonitor` resource is created (default `true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_monitor: Option<bool>,
    /// The `PodMonitor` resource labels, applicable when `pod-monitor` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_monitor_labels: Option<Vec<String>>,
}

/// The Pull Secret trait sets a pull secret on the pod,
/// to allow Kubernetes to retrieve the container image from an external registry.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PullSecretTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The pull secret name to set on the Pod. If left empty this is automatically taken from the `IntegrationPlatform` registry configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
    /// When using a global operator with a shared platform, this enables delegation of the `system:image-puller` cluster role on the operator namespace to the integration service account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_puller_delegation: Option<bool>,
    /// Automatically configures the platform registry secret on the pod if it is of type `kubernetes.io/dockerconfigjson`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuarkusPackageType {
    FastJar,
    Native,
}

/// The Quarkus trait configures the Quarkus runtime.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuarkusTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The Quarkus package types, either `fast-jar` or `native` (default `fast-jar`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_types: Option<Vec<QuarkusPackageType>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TlsTermination {
    Edge,
    Reencrypt,
    Passthrough,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum InsecureEdgeTerminationPolicy {
    None,
    Allow,
    Redirect,
}

/// The Route trait can be used to configure the creation of OpenShift routes for the integration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The annotations added to route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    /// To configure the host exposed by the route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The TLS termination type, like `edge`, `passthrough` or `reencrypt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_termination: Option<TlsTermination>,
    /// The TLS certificate contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_certificate: Option<String>,
    /// The secret name and key reference to the TLS certificate. The format is "secret-name[/key-name]".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_certificate_secret: Option<String>,
    /// The TLS certificate key contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_key: Option<String>,
    /// The secret name and key reference to the TLS certificate key. The format is "secret-name[/key-name]".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_key_secret: Option<String>,
    /// The TLS CA certificate contents.
    #[serde(rename = "tlsCACertificate", skip_serializing_if = "Option::is_none")]
    pub tls_ca_certificate: Option<String>,
    /// The secret name and key reference to the TLS CA certificate. The format is "secret-name[/key-name]".
    #[serde(rename = "tlsCACertificateSecret", skip_serializing_if = "Option::is_none")]
    pub tls_ca_certificate_secret: Option<String>,
    /// The destination CA certificate provides the contents of the ca certificate of the final destination.
    #[serde(rename = "tlsDestinationCACertificate", skip_serializing_if = "Option::is_none")]
    pub tls_destination_ca_certificate: Option<String>,
    /// The secret name and key reference to the destination CA certificate. The format is "secret-name[/key-name]".
    #[serde(rename = "tlsDestinationCACertificateSecret", skip_serializing_if = "Option::is_none")]
    pub tls_destination_ca_certificate_secret: Option<String>,
    /// To configure how to deal with insecure traffic, e.g. `Allow`, `Disable` or `Redirect` traffic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_insecure_edge_termination_policy: Option<InsecureEdgeTerminationPolicy>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum ServiceType {
    ClusterIP,
    NodePort,
    LoadBalancer,
}

/// The Service trait exposes the integration with a Service resource so that it can be accessed by other applications
/// (or integrations) in the same namespace.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// To automatically detect from the code if a Service needs to be created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    /// Enable Service to be exposed as NodePort (default `false`).
    /// Deprecated: Use service type instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_port: Option<bool>,
    /// The type of service to be used, either 'ClusterIP', 'NodePort' or 'LoadBalancer'.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<ServiceType>,
}

/// The Service Binding trait allows users to connect to Services in Kubernetes.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBindingTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// List of Services in the form [[apigroup/]version:]kind:[namespace/]name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

/// This trait sets Tolerations over Integration pods.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TolerationTrait {
    #[serde(flatten)]
    pub trait_: Trait,
    /// The list of taints to tolerate, in the form `Key[=Value]:Effect[:Seconds]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taints: Option<Vec<String>>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn traits_use_dashed_names() {
        let traits = Traits {
            knative_service: Some(KnativeServiceTrait {
                min_scale: Some(1),
                autoscaling_class: Some("kpa.autoscaling.knative.dev".into()),
                ..Default::default()
            }),
            pull_secret: Some(PullSecretTrait {
                trait_: Trait { enabled: Some(false), configuration: None },
                ..Default::default()
            }),
            three_scale: Some(AddonTrait(json!({ "enabled": true }))),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&traits).unwrap(),
            json!({
                "knative-service": { "minScale": 1, "class": "kpa.autoscaling.knative.dev" },
                "pull-secret": { "enabled": false },
                "3scale": { "enabled": true }
            })
        );
    }

    #[test]
    fn deserialize_rolling_update_int_or_string() {
        let deployment: DeploymentTrait = serde_json::from_value(json!({
            "enabled": true,
            "strategy": "RollingUpdate",
            "rollingUpdateMaxSurge": 2,
            "rollingUpdateMaxUnavailable": "25%"
        }))
        .unwrap();
        assert_eq!(deployment.trait_.enabled, Some(true));
        assert_eq!(deployment.strategy, Some(DeploymentStrategyType::RollingUpdate));
        assert_eq!(deployment.rolling_update_max_surge, Some(IntOrString::Int(2)));
        assert_eq!(
            deployment.rolling_update_max_unavailable,
            Some(IntOrString::String("25%".into()))
        );
    }

    #[test]
    fn enum_values_match_wire_format() {
        assert_eq!(serde_json::to_value(DeployerKind::KnativeService).unwrap(), json!("knative-service"));
        assert_eq!(serde_json::to_value(QuarkusPackageType::FastJar).unwrap(), json!("fast-jar"));
        assert_eq!(serde_json::to_value(RolloutVisibility::ClusterLocal).unwrap(), json!("cluster-local"));
    }
}
