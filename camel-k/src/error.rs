use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Discovery errors
    #[error("Error from discovery: {0}")]
    Discovery(#[source] DiscoveryError),
    /// Endpoint validation errors
    #[error("invalid {position} endpoint: {reason}")]
    InvalidEndpoint {
        position: String,
        reason: EndpointError,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscoveryError {
    #[error("resolution of {0} references is not implemented")]
    ResolveReferenceNotImplemented(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EndpointError {
    #[error("no ref or URI specified in endpoint")]
    EmptyEndpoint,
    #[error("cannot use both ref and URI to specify an endpoint: only one of them should be used")]
    RefAndUri,
    #[error("ref must specify a {0}")]
    IncompleteRef(&'static str),
    #[error("unable to parse uri: {0}")]
    UriParseErr(#[from] url::ParseError),
}
