mod apis;
pub mod error;

pub use apis::camel::{v1, v1alpha1};

#[doc = include_str!("../../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
