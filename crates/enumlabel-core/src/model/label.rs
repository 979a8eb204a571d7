use derive_more::Display;
#[cfg(feature = "serde")]
use serde::Serialize;

///
/// LabelField
/// Selects which half of a `DisplayLabel` a lookup keys on.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum LabelField {
    #[display("name")]
    Name,

    #[display("description")]
    Description,
}

///
/// DisplayLabel
///
/// Declarative metadata attached to one enum declaration.
/// Labels live in a side-table keyed by the declaring `ident`; the
/// constant itself is recovered through that ident, never by position.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DisplayLabel {
    pub ident: &'static str,
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl DisplayLabel {
    #[must_use]
    pub const fn new(
        ident: &'static str,
        name: Option<&'static str>,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            ident,
            name,
            description,
        }
    }

    #[must_use]
    pub const fn field(&self, field: LabelField) -> Option<&'static str> {
        match field {
            LabelField::Name => self.name,
            LabelField::Description => self.description,
        }
    }

    /// Exact, case-sensitive comparison; an absent field never matches.
    #[must_use]
    pub fn matches(&self, field: LabelField, query: &str) -> bool {
        self.field(field).is_some_and(|value| value == query)
    }
}

///
/// TESTS
///
