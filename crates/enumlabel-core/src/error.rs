use crate::model::LabelField;
use thiserror::Error as ThisError;

///
/// LookupError
///
/// Raised by label lookups. `InvalidArgument` is a caller error and is
/// reported before any scan; the other variants describe a malformed
/// enum declaration.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LookupError {
    #[error("invalid argument: `{param}` is absent")]
    InvalidArgument { param: &'static str },

    #[error(
        "ambiguous display {field} '{value}' on {enum_ident}: shared by {}",
        .idents.join(", ")
    )]
    AmbiguousMetadata {
        enum_ident: &'static str,
        field: LabelField,
        value: String,
        idents: Vec<&'static str>,
    },

    #[error("label on {enum_ident} names undeclared constant '{ident}'")]
    DanglingLabel {
        enum_ident: &'static str,
        ident: &'static str,
    },

    #[error("constant '{ident}' on {enum_ident} carries more than one label")]
    DuplicateLabel {
        enum_ident: &'static str,
        ident: &'static str,
    },
}

impl LookupError {
    pub(crate) const fn invalid_argument(param: &'static str) -> Self {
        Self::InvalidArgument { param }
    }

    #[must_use]
    pub const fn kind(&self) -> LookupErrorKind {
        match self {
            Self::InvalidArgument { .. } => LookupErrorKind::InvalidArgument,
            Self::AmbiguousMetadata { .. } => LookupErrorKind::AmbiguousMetadata,
            Self::DanglingLabel { .. } => LookupErrorKind::DanglingLabel,
            Self::DuplicateLabel { .. } => LookupErrorKind::DuplicateLabel,
        }
    }
}

///
/// LookupErrorKind
/// Stable classification of a `LookupError`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LookupErrorKind {
    InvalidArgument,
    AmbiguousMetadata,
    DanglingLabel,
    DuplicateLabel,
}

///
/// TESTS
///
