use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::Serialize;

///
/// Variant
/// One declared constant: its ident and its integer value.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Variant {
    pub ident: &'static str,
    pub value: i64,
}

impl Variant {
    #[must_use]
    pub const fn new(ident: &'static str, value: i64) -> Self {
        Self { ident, value }
    }

    ///
    /// from_discriminant
    ///
    /// Build from a discriminant widened to `i128`. Panics if the value
    /// does not fit in `i64`; inside a `static` initializer that panic is a
    /// compile error, so derived tables never hold a wrapped value.
    ///
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_discriminant(ident: &'static str, discriminant: i128) -> Self {
        assert!(
            discriminant >= i64::MIN as i128 && discriminant <= i64::MAX as i128,
            "enum discriminant does not fit in i64"
        );

        Self::new(ident, discriminant as i64)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.ident, self.value)
    }
}

///
/// TESTS
///
