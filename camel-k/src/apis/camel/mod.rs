//! Types of the `camel.apache.org` API group.
pub mod v1;
pub mod v1alpha1;
