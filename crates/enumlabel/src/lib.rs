//! ## Crate layout
//! - `core`: enum metadata model, the `LabeledEnum` trait, and lookups.
//! - `LabeledEnum` derive (feature `derive`, on by default): builds the
//!   metadata from `#[label(name = "...", description = "...")]` attributes.
//!
//! Generated code refers to this crate as `::enumlabel`, so depend on it
//! under that name.

pub use enumlabel_core as core;

pub use enumlabel_core::{
    DisplayLabel, EnumType, LabelField, LabeledEnum, LookupError, LookupErrorKind, Variant,
    lookup,
};

#[cfg(feature = "derive")]
pub use enumlabel_derive::LabeledEnum;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;

    #[cfg(feature = "derive")]
    pub use enumlabel_derive::LabeledEnum;
}
