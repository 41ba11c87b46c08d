use crate::schema::Diagnostics;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The configuration does not match the data source schema
    #[error("invalid configuration:\n{0}")]
    InvalidConfig(Diagnostics),
    /// The configuration matches the schema but is rejected by the resource
    #[error("invalid spec: {0}")]
    InvalidSpec(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("unable to decode configuration: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unable to encode manifest: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unable to marshal manifest: {0}")]
    Marshal(#[from] serde_yaml::Error),
    #[error("no data source named {0}")]
    UnknownDataSource(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
