//! Read-only data sources that render Camel-K custom resources to YAML manifests.
pub mod datasource;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod provider;
pub mod schema;
pub mod validators;

pub use datasource::{DataSource, ManifestDataSource, ManifestModel, ManifestResource};
pub use error::{Error, Result};
pub use metadata::ManifestMetadata;
pub use provider::Provider;
