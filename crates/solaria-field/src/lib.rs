//! Potential-field navigation: a board-sized terrain of repelling peaks and attracting troughs.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod field;

pub use config::{DecayMode, FieldConfig};
pub use field::PotentialField;
