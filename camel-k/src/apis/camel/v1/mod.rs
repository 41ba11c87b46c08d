mod integration_types;
mod pod_types;
mod trait_types;

pub use integration_types::*;
pub use pod_types::*;
pub use trait_types::*;
