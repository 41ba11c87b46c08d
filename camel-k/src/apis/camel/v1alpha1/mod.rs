mod endpoint_types;
mod error_handler_types;
mod kamelet_binding_types;
mod status_types;

pub use endpoint_types::*;
pub use error_handler_types::*;
pub use kamelet_binding_types::*;
pub use status_types::*;
