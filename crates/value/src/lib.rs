//! deepdiff-value: normalized value model and adapters for deepdiff.
//!
//! The diff engine compares values through a closed tagged-variant
//! representation rather than host-type reflection. This crate holds
//! that representation ([`Value`], [`Field`]), its default text
//! rendering, the [`ToValue`] adapter trait with impls for std types,
//! and conversion from `serde_json::Value`.

pub mod adapt;
pub mod json;
pub mod value;

pub use adapt::ToValue;
pub use value::{Field, Value};
