//! Core runtime for enumlabel: the enum metadata model, the `LabeledEnum`
//! capability, and lookups of constants by display name or description.
#![warn(unreachable_pub)]

// lets `#[derive(LabeledEnum)]` resolve `::enumlabel` inside this crate's tests
extern crate self as enumlabel;

pub mod error;
pub mod lookup;
pub mod model;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{LookupError, LookupErrorKind};
pub use model::{DisplayLabel, EnumType, LabelField, Variant};
pub use traits::LabeledEnum;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::LookupError,
        model::{EnumType, LabelField},
        traits::LabeledEnum,
    };
}
