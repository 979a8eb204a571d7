use crate::{
    error::LookupError,
    lookup,
    model::{DisplayLabel, LabelField, Variant},
};

#[cfg(feature = "serde")]
use serde::Serialize;

///
/// EnumType
///
/// Runtime type token for one enumeration: its declared constants in
/// declaration order plus the label side-table.
///
/// Emitted as a `static` by `#[derive(LabeledEnum)]`, or written by hand
/// as a registration table through `EnumType::new`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EnumType {
    pub ident: &'static str,
    pub variants: &'static [Variant],
    pub labels: &'static [DisplayLabel],
}

impl EnumType {
    #[must_use]
    pub const fn new(
        ident: &'static str,
        variants: &'static [Variant],
        labels: &'static [DisplayLabel],
    ) -> Self {
        Self {
            ident,
            variants,
            labels,
        }
    }

    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    #[must_use]
    pub const fn variants(&self) -> &'static [Variant] {
        self.variants
    }

    #[must_use]
    pub const fn labels(&self) -> &'static [DisplayLabel] {
        self.labels
    }

    /// Declared constant with the given ident.
    #[must_use]
    pub fn variant(&self, ident: &str) -> Option<&'static Variant> {
        self.variants.iter().find(|v| v.ident == ident)
    }

    /// Label attached to the declaration with the given ident, if any.
    #[must_use]
    pub fn label(&self, ident: &str) -> Option<&'static DisplayLabel> {
        self.labels.iter().find(|l| l.ident == ident)
    }

    pub fn by_name(&self, name: &str) -> Result<Option<&'static Variant>, LookupError> {
        lookup::find(self, LabelField::Name, name)
    }

    pub fn by_description(
        &self,
        description: &str,
    ) -> Result<Option<&'static Variant>, LookupError> {
        lookup::find(self, LabelField::Description, description)
    }

    /// True if any constant, aliases included, carries `value`.
    #[must_use]
    pub fn has_element(&self, value: i64) -> bool {
        self.variants.iter().any(|v| v.value == value)
    }

    ///
    /// check_labels
    ///
    /// Eagerly validate the label side-table: every label must name a
    /// declared constant, no constant may carry two labels, and no label
    /// value may be shared by two declarations. Lookups never call this; ambiguity is otherwise
    /// reported at the first query that hits it.
    ///
    pub fn check_labels(&self) -> Result<(), LookupError> {
        for (i, label) in self.labels.iter().enumerate() {
            if self.variant(label.ident).is_none() {
                return Err(LookupError::DanglingLabel {
                    enum_ident: self.ident,
                    ident: label.ident,
                });
            }

            if self.labels[..i].iter().any(|l| l.ident == label.ident) {
                return Err(LookupError::DuplicateLabel {
                    enum_ident: self.ident,
                    ident: label.ident,
                });
            }
        }

        for field in [LabelField::Name, LabelField::Description] {
            for label in self.labels {
                if let Some(value) = label.field(field) {
                    lookup::find(self, field, value)?;
                }
            }
        }

        Ok(())
    }
}

///
/// TESTS
///
