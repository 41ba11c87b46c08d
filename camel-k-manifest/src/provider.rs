use crate::datasource::{DataSource, ManifestDataSource};
use crate::error::{Error, Result};
use camel_k::v1alpha1::KameletBinding;

/// Type name prefixed to every data source of the provider.
pub const PROVIDER_TYPE_NAME: &str = "k8s";

/// A named set of data sources.
pub struct Provider {
    type_name: String,
    version: String,
    data_sources: Vec<Box<dyn DataSource>>,
}

impl Provider {
    /// A provider serving the manifest data sources of this crate.
    pub fn new(type_name: impl Into<String>, version: impl Into<String>) -> Self {
        Provider {
            type_name: type_name.into(),
            version: version.into(),
            data_sources: vec![Box::new(ManifestDataSource::<KameletBinding>::new())],
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn data_source_names(&self) -> Vec<String> {
        self.data_sources
            .iter()
            .map(|ds| ds.type_name(&self.type_name))
            .collect()
    }

    /// Look up a data source by its full type name.
    pub fn data_source(&self, name: &str) -> Result<&dyn DataSource> {
        self.data_sources
            .iter()
            .find(|ds| ds.type_name(&self.type_name) == name)
            .map(|ds| ds.as_ref())
            .ok_or_else(|| Error::UnknownDataSource(name.to_string()))
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::new(PROVIDER_TYPE_NAME, env!("CARGO_PKG_VERSION"))
    }
}
