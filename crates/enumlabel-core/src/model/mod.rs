//! Runtime metadata model for labeled enumerations.
//!
//! An `EnumType` owns two static tables: the declared constants (`Variant`)
//! and the label side-table (`DisplayLabel`). Both are produced at compile
//! time and never change.
mod enum_type;
mod label;
mod variant;

pub use enum_type::EnumType;
pub use label::{DisplayLabel, LabelField};
pub use variant::Variant;
